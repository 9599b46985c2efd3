//! # authsecret types
//!
//! Core types, traits, and enums shared across all authsecret crates.
//!
//! - The error type and `Result` alias
//! - Enums for log levels, secret origins, strong source kinds and output formats
//! - Seam traits for the strong random source, the weak RNG and the clock
//! - Generator configuration
//!
//! ## Example
//!
//! ```
//! use authsecret_types::{SecretOrigin, StrongSourceKind};
//!
//! let kind: StrongSourceKind = "openssl".parse().unwrap();
//! assert_eq!(kind, StrongSourceKind::Openssl);
//! assert_eq!(SecretOrigin::Fallback.to_string(), "fallback");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod enums;
pub mod traits;
pub mod config;

// Re-export common types for convenience
pub use errors::{AuthSecretError, Result};
pub use enums::{LogLevel, OutputFormat, SecretOrigin, StrongSourceKind};
pub use traits::{Clock, StrongSource, WeakRng};
pub use config::GeneratorConfig;
