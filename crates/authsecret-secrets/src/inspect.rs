//! Classify an existing secret string.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use serde::Serialize;
use std::fmt;

use crate::fallback::FALLBACK_LEN;
use crate::sources::SECRET_BYTES;

/// Shape of a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecretKind {
    /// Padded base64 of 32 bytes, as the strong path produces
    StrongBase64,
    /// 43 base64 characters without padding, as the fallback produces
    FallbackShaped,
    /// Anything else
    Unrecognized,
}

impl fmt::Display for SecretKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretKind::StrongBase64 => write!(f, "strong-base64"),
            SecretKind::FallbackShaped => write!(f, "fallback-shaped"),
            SecretKind::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Result of [`inspect`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretReport {
    /// Detected shape
    pub kind: SecretKind,
    /// Length in characters after trimming
    pub length: usize,
    /// Decoded length when the text is valid base64
    pub decoded_bytes: Option<usize>,
}

/// Standard alphabet, padding optional, non-zero trailing bits accepted.
///
/// A fallback secret is a cut-off encoding, so its last character need not be
/// canonical.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Inspect a secret.
pub fn inspect(secret: &str) -> SecretReport {
    let secret = secret.trim();
    let decoded_bytes = LENIENT.decode(secret).ok().map(|bytes| bytes.len());

    let kind = if secret.ends_with('=') && decoded_bytes == Some(SECRET_BYTES) {
        SecretKind::StrongBase64
    } else if secret.len() == FALLBACK_LEN && decoded_bytes.is_some() {
        SecretKind::FallbackShaped
    } else {
        SecretKind::Unrecognized
    };

    SecretReport {
        kind,
        length: secret.chars().count(),
        decoded_bytes,
    }
}
