//! # authsecret core
//!
//! Core utilities shared by the secret generator and the CLI.
//!
//! This crate provides:
//!
//! - **Configuration**: layered settings (defaults, YAML file, environment)
//! - **Logging**: `tracing` subscriber setup writing to stderr
//! - **Time**: the system wall clock
//! - **Process Execution**: scoped subprocess runs with captured output
//! - **Env files**: reading and updating `NAME=value` files
//!
//! ## Example
//!
//! ```no_run
//! use authsecret_core::{config::Settings, log};
//!
//! let settings = Settings::load(None)?;
//! log::init(settings.log_level)?;
//! # Ok::<(), authsecret_core::AuthSecretError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod log;
pub mod time;
pub mod util;

// Re-export commonly used items
pub use config::Settings;
pub use time::SystemClock;
pub use authsecret_types::{AuthSecretError, Result};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "authsecret";

/// Setting populated by default when no variable name is configured.
pub const DEFAULT_VAR_NAME: &str = "BETTER_AUTH_SECRET";
