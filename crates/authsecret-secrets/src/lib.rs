//! # authsecret secrets
//!
//! Generation of authentication signing secrets.
//!
//! The primary path draws 32 bytes from a cryptographically strong source
//! and encodes them as standard base64. When that source fails, a warning is
//! logged and a much weaker 43-character fallback built from a
//! non-cryptographic RNG and the wall clock is returned instead. Callers
//! always get a usable string back.
//!
//! ```
//! use authsecret_secrets::SecretGenerator;
//!
//! let secret = SecretGenerator::new().generate();
//! assert_eq!(secret.len(), 44);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod base36;
pub mod fallback;
pub mod generator;
pub mod inspect;
pub mod sources;

pub use fallback::{fallback_secret, ClockSeededRng, FALLBACK_LEN};
pub use generator::{generate_secret, GeneratedSecret, SecretGenerator};
pub use inspect::{inspect, SecretKind, SecretReport};
pub use sources::{OpensslRand, OsRandom, SECRET_BYTES};
