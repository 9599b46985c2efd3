//! Platform CSPRNG source.

use authsecret_types::{AuthSecretError, Result, StrongSource};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;

use super::SECRET_BYTES;

/// 32 bytes from the operating system's random source, base64-encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl StrongSource for OsRandom {
    fn name(&self) -> &'static str {
        "os-rng"
    }

    fn secret(&mut self) -> Result<String> {
        let mut bytes = [0u8; SECRET_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| AuthSecretError::StrongSource(format!("OS random source failed: {}", e)))?;
        Ok(STANDARD.encode(bytes))
    }
}
