//! Logging system for authsecret.
//!
//! Everything goes to stderr so stdout stays reserved for the secret itself.

use authsecret_types::{AuthSecretError, LogLevel, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` wins, otherwise the given level.
pub fn filter_for(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_directive()))
}

/// Initialize the global subscriber at the given level.
pub fn init(level: LogLevel) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init()
        .map_err(|e| AuthSecretError::Other(format!("Failed to initialize logging: {}", e)))
}
