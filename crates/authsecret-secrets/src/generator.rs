//! Secret generation with a strong primary path and a weak fallback.

use authsecret_core::SystemClock;
use authsecret_types::{AuthSecretError, Clock, GeneratorConfig, SecretOrigin, StrongSource, WeakRng};
use serde::Serialize;

use crate::fallback::{fallback_secret, ClockSeededRng};
use crate::sources::{self, OsRandom};

/// A generated secret together with the path that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSecret {
    /// The secret text
    pub value: String,
    /// Which path produced it
    pub origin: SecretOrigin,
}

/// Secret generator.
///
/// Tries the strong source first; on any failure logs a warning and returns
/// the weak fallback. Generation never fails.
#[derive(Debug, Clone)]
pub struct SecretGenerator<S, R = ClockSeededRng, C = SystemClock> {
    strong: S,
    weak: R,
    clock: C,
}

impl SecretGenerator<OsRandom> {
    /// Generator backed by the platform CSPRNG.
    pub fn new() -> Self {
        Self::with_parts(OsRandom, ClockSeededRng::new(), SystemClock)
    }
}

impl Default for SecretGenerator<OsRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretGenerator<Box<dyn StrongSource>> {
    /// Generator using the strong source selected by `config`.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::with_parts(sources::from_config(config), ClockSeededRng::new(), SystemClock)
    }
}

impl<S, R, C> SecretGenerator<S, R, C>
where
    S: StrongSource,
    R: WeakRng,
    C: Clock,
{
    /// Assemble a generator from explicit parts.
    pub fn with_parts(strong: S, weak: R, clock: C) -> Self {
        Self { strong, weak, clock }
    }

    /// Generate one secret.
    pub fn generate(&mut self) -> String {
        self.generate_detailed().value
    }

    /// Generate one secret and report which path produced it.
    ///
    /// The fallback warning is emitted through `tracing`; it only reaches
    /// stderr once a subscriber is installed, e.g. with
    /// `authsecret_core::log::init`.
    pub fn generate_detailed(&mut self) -> GeneratedSecret {
        let attempt = self.strong.secret().and_then(|secret| {
            let secret = secret.trim();
            if secret.is_empty() {
                Err(AuthSecretError::StrongSource("empty output".to_string()))
            } else {
                Ok(secret.to_string())
            }
        });

        match attempt {
            Ok(value) => {
                tracing::debug!("generated secret using {}", self.strong.name());
                GeneratedSecret { value, origin: SecretOrigin::Strong }
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to generate secret using {} ({}). Using a weaker fallback value.",
                    self.strong.name(),
                    e
                );
                GeneratedSecret {
                    value: fallback_secret(&mut self.weak, &self.clock),
                    origin: SecretOrigin::Fallback,
                }
            }
        }
    }
}

/// Generate one secret with the default generator.
///
/// Install a `tracing` subscriber first (`authsecret_core::log::init`) or the
/// fallback warning is dropped.
pub fn generate_secret() -> String {
    SecretGenerator::new().generate()
}
