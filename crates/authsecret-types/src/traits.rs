//! Seams between the generator and the world it draws randomness from.
//!
//! Each trait has one production implementation in `authsecret-secrets` or
//! `authsecret-core`. With the `mock` feature enabled, `mockall` doubles
//! (`MockStrongSource`, `MockWeakRng`, `MockClock`) are generated for tests.

#[cfg(any(test, feature = "mock"))]
use mockall::automock;

use crate::errors::Result;

/// A cryptographically strong secret source.
///
/// Implementers return 32 random bytes already encoded as standard base64.
/// Any failure must be reported as `AuthSecretError::StrongSource`.
#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait StrongSource {
    /// Short name used in diagnostics (e.g. "os-rng").
    fn name(&self) -> &'static str;

    /// Produce one base64-encoded secret.
    fn secret(&mut self) -> Result<String>;
}

impl<T: StrongSource + ?Sized> StrongSource for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn secret(&mut self) -> Result<String> {
        (**self).secret()
    }
}

/// Non-cryptographic random number source used by the fallback path.
#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait WeakRng {
    /// Next pseudo-random value.
    fn next_u64(&mut self) -> u64;
}

/// Wall-clock time source.
#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}
