//! Common enumerations used throughout authsecret.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{AuthSecretError, Result};

/// Log level enumeration for the logging system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// No logging
    None,
    /// Error messages only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Detailed trace messages
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::None => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = AuthSecretError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "NONE" | "OFF" => Ok(LogLevel::None),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(AuthSecretError::Validation(format!("Invalid log level: {}", s))),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::None => write!(f, "NONE"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Trace => write!(f, "TRACE"),
        }
    }
}

/// Which generation path produced a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretOrigin {
    /// Cryptographically strong source (32 random bytes, base64)
    Strong,
    /// Weak token + timestamp fallback
    Fallback,
}

impl fmt::Display for SecretOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretOrigin::Strong => write!(f, "strong"),
            SecretOrigin::Fallback => write!(f, "fallback"),
        }
    }
}

/// Kind of strong random source to try first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrongSourceKind {
    /// Platform CSPRNG
    #[default]
    Os,
    /// `openssl rand -base64 32` subprocess
    Openssl,
}

impl FromStr for StrongSourceKind {
    type Err = AuthSecretError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "os" => Ok(StrongSourceKind::Os),
            "openssl" => Ok(StrongSourceKind::Openssl),
            _ => Err(AuthSecretError::Validation(format!(
                "Invalid strong source '{}': expected 'os' or 'openssl'",
                s
            ))),
        }
    }
}

impl fmt::Display for StrongSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrongSourceKind::Os => write!(f, "os"),
            StrongSourceKind::Openssl => write!(f, "openssl"),
        }
    }
}

/// How the CLI prints a generated secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The bare secret
    #[default]
    Plain,
    /// `NAME=secret`
    Env,
    /// JSON object with name, secret and origin
    Json,
}

impl FromStr for OutputFormat {
    type Err = AuthSecretError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "env" => Ok(OutputFormat::Env),
            "json" => Ok(OutputFormat::Json),
            _ => Err(AuthSecretError::Validation(format!("Invalid output format: {}", s))),
        }
    }
}
