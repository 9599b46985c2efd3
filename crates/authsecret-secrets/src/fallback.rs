//! Weak fallback secret.
//!
//! Known weak path: the output is only as unpredictable as a
//! non-cryptographic RNG seeded from the clock, plus a millisecond
//! timestamp. It exists so callers never get nothing back; treat any secret
//! it produces as a placeholder to rotate.

use authsecret_types::{Clock, WeakRng};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::base36;

/// Length of every fallback secret.
pub const FALLBACK_LEN: usize = 43;

/// Plaintext length whose base64 form (44 chars, one `=`) covers
/// [`FALLBACK_LEN`] once the padding is cut.
const PLAINTEXT_LEN: usize = 32;

/// `SmallRng` seeded from the clock and process id.
///
/// Never touches the OS entropy pool, so it still works when the strong
/// source does not.
#[derive(Debug, Clone)]
pub struct ClockSeededRng(SmallRng);

impl ClockSeededRng {
    /// Seed from the current time and process id.
    pub fn new() -> Self {
        let nanos = Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_else(|| Utc::now().timestamp_micros()) as u64;
        let pid = u64::from(std::process::id());
        Self::with_seed(nanos ^ pid.rotate_left(32))
    }

    /// Fixed seed, for reproducible tests.
    pub fn with_seed(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for ClockSeededRng {
    fn default() -> Self {
        Self::new()
    }
}

impl WeakRng for ClockSeededRng {
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }
}

/// Build a fallback secret from a weak RNG and a clock.
///
/// The plaintext is a base-36 random token followed by the base-36
/// millisecond timestamp. The token is extended with further draws and cut so
/// the plaintext is exactly 32 bytes, keeping the whole timestamp inside the
/// 43 characters that survive truncation.
pub fn fallback_secret<R, C>(rng: &mut R, clock: &C) -> String
where
    R: WeakRng + ?Sized,
    C: Clock + ?Sized,
{
    let timestamp = base36::encode_u64(clock.now_millis());
    let token_len = PLAINTEXT_LEN - timestamp.len();

    let mut token = String::with_capacity(token_len + 13);
    while token.len() < token_len {
        token.push_str(&base36::encode_u64(rng.next_u64()));
    }
    token.truncate(token_len);

    let mut encoded = STANDARD.encode(format!("{}{}", token, timestamp));
    encoded.truncate(FALLBACK_LEN);
    encoded
}
