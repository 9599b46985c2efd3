//! Error types for authsecret operations.

use thiserror::Error;

/// The main error type for authsecret operations.
///
/// `StrongSource` is the only failure class the generator itself produces,
/// and it never leaves the generator: it is turned into the fallback path.
/// The remaining variants belong to configuration, env-file and CLI plumbing.
#[derive(Error, Debug)]
pub enum AuthSecretError {
    /// The cryptographically strong random source is unavailable or failed
    #[error("Strong random source unavailable: {0}")]
    StrongSource(String),

    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Env file read/write error
    #[error("Env file error: {0}")]
    EnvFile(String),

    /// External process error
    #[error("Process error: {0}")]
    Process(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for authsecret operations.
pub type Result<T> = std::result::Result<T, AuthSecretError>;

/// Helper macro to bail out with an AuthSecretError
///
/// # Example
///
/// ```ignore
/// if name.is_empty() {
///     bail!(Validation, "Variable name must not be empty");
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::AuthSecretError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::AuthSecretError::$variant(format!($fmt, $($arg)*)))
    };
    ($msg:expr) => {
        return Err($crate::AuthSecretError::Other($msg.to_string()))
    };
}
