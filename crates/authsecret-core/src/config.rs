//! Configuration management for authsecret.
//!
//! Settings are resolved in this priority order (highest first):
//! 1. Command-line flags (applied by the CLI after loading)
//! 2. Environment variables (`AUTHSECRET_*`)
//! 3. Values loaded from the YAML config file
//! 4. Default values
//!
//! A missing config file is not an error.

use authsecret_types::{AuthSecretError, GeneratorConfig, LogLevel, Result, StrongSourceKind};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::util::envfile::validate_var_name;
use crate::util::fs::expand_path;
use crate::DEFAULT_VAR_NAME;

/// Environment variable overriding [`Settings::source`].
pub const ENV_SOURCE: &str = "AUTHSECRET_SOURCE";
/// Environment variable overriding [`Settings::openssl_path`].
pub const ENV_OPENSSL: &str = "AUTHSECRET_OPENSSL";
/// Environment variable overriding [`Settings::var_name`].
pub const ENV_VAR_NAME: &str = "AUTHSECRET_VAR";
/// Environment variable overriding [`Settings::log_level`].
pub const ENV_LOG: &str = "AUTHSECRET_LOG";

/// Configuration layer a value was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigLayer {
    /// Default values
    Default = 0,
    /// Values loaded from file
    Loaded = 1,
    /// Values from environment variables
    Environment = 2,
    /// Values set programmatically (CLI flags)
    Set = 3,
}

/// On-disk shape of the config file; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    source: Option<StrongSourceKind>,
    openssl_path: Option<String>,
    var_name: Option<String>,
    log_level: Option<LogLevel>,
}

/// Resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Strong source to try first
    pub source: StrongSourceKind,
    /// Executable for the openssl source
    pub openssl_path: String,
    /// Name of the variable the secret populates
    pub var_name: String,
    /// Log level when `RUST_LOG` is not set
    pub log_level: LogLevel,
    /// Highest layer that contributed a value
    pub layer: ConfigLayer,
}

impl Default for Settings {
    fn default() -> Self {
        let generator = GeneratorConfig::default();
        Self {
            source: generator.source,
            openssl_path: generator.openssl_path,
            var_name: DEFAULT_VAR_NAME.to_string(),
            log_level: LogLevel::default(),
            layer: ConfigLayer::Default,
        }
    }
}

impl Settings {
    /// Load settings from `path` (or the default location) and the process
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => Some(expand_path(path)),
            None => Self::default_path(),
        };

        let mut settings = Self::default();
        if let Some(path) = path {
            settings.apply_file(&path)?;
        }
        settings.apply_env(std::env::vars())?;
        Ok(settings)
    }

    /// Default config location, `~/.authsecret/config`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".authsecret").join("config"))
    }

    /// Merge values from a YAML file. Missing files are skipped.
    pub fn apply_file(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            tracing::debug!("no config file at {}", path.display());
            return Ok(());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AuthSecretError::Config(format!("Failed to read config file: {}", e)))?;

        if content.trim().is_empty() {
            return Ok(());
        }

        let file: SettingsFile = serde_yaml::from_str(&content).map_err(|e| {
            AuthSecretError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        let mut touched = false;
        if let Some(source) = file.source {
            self.source = source;
            touched = true;
        }
        if let Some(openssl_path) = file.openssl_path {
            self.openssl_path = openssl_path;
            touched = true;
        }
        if let Some(var_name) = file.var_name {
            validate_var_name(&var_name)
                .map_err(|e| AuthSecretError::Config(format!("var_name: {}", e)))?;
            self.var_name = var_name;
            touched = true;
        }
        if let Some(log_level) = file.log_level {
            self.log_level = log_level;
            touched = true;
        }

        if touched {
            self.layer = self.layer.max(ConfigLayer::Loaded);
        }
        Ok(())
    }

    /// Merge `AUTHSECRET_*` overrides from an environment snapshot.
    pub fn apply_env<I>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut touched = false;

        for (key, value) in vars {
            match key.as_str() {
                ENV_SOURCE => {
                    self.source = value
                        .parse()
                        .map_err(|e| AuthSecretError::Config(format!("{}: {}", ENV_SOURCE, e)))?;
                }
                ENV_OPENSSL => self.openssl_path = value,
                ENV_VAR_NAME => {
                    validate_var_name(&value)
                        .map_err(|e| AuthSecretError::Config(format!("{}: {}", ENV_VAR_NAME, e)))?;
                    self.var_name = value;
                }
                ENV_LOG => {
                    self.log_level = value
                        .parse()
                        .map_err(|e| AuthSecretError::Config(format!("{}: {}", ENV_LOG, e)))?;
                }
                _ => continue,
            }
            touched = true;
        }

        if touched {
            self.layer = self.layer.max(ConfigLayer::Environment);
        }
        Ok(())
    }

    /// Record that a value was overridden programmatically.
    pub fn mark_set(&mut self) {
        self.layer = ConfigLayer::Set;
    }

    /// The slice of settings the generator needs.
    pub fn generator(&self) -> GeneratorConfig {
        GeneratorConfig {
            source: self.source,
            openssl_path: self.openssl_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.source, StrongSourceKind::Os);
        assert_eq!(settings.openssl_path, "openssl");
        assert_eq!(settings.var_name, "BETTER_AUTH_SECRET");
        assert_eq!(settings.log_level, LogLevel::Warn);
        assert_eq!(settings.layer, ConfigLayer::Default);
    }

    #[test]
    fn test_missing_and_empty_files() {
        let dir = TempDir::new().unwrap();
        let mut settings = Settings::default();
        settings.apply_file(&dir.path().join("nope")).unwrap();
        assert_eq!(settings, Settings::default());

        let empty = dir.path().join("config");
        fs::write(&empty, "\n").unwrap();
        settings.apply_file(&empty).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_file_layer() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, "source: openssl\nvar_name: AUTH_SECRET\nlog_level: DEBUG\n").unwrap();

        let mut settings = Settings::default();
        settings.apply_file(&path).unwrap();
        assert_eq!(settings.source, StrongSourceKind::Openssl);
        assert_eq!(settings.var_name, "AUTH_SECRET");
        assert_eq!(settings.log_level, LogLevel::Debug);
        assert_eq!(settings.openssl_path, "openssl");
        assert_eq!(settings.layer, ConfigLayer::Loaded);
    }

    #[test]
    fn test_bad_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, "source: urandom\n").unwrap();

        let err = Settings::default().apply_file(&path).unwrap_err();
        assert!(matches!(err, AuthSecretError::Config(_)));

        fs::write(&path, "colour: blue\n").unwrap();
        assert!(Settings::default().apply_file(&path).is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, "source: openssl\nopenssl_path: /opt/ssl/bin/openssl\n").unwrap();

        let mut settings = Settings::default();
        settings.apply_file(&path).unwrap();
        settings
            .apply_env(env(&[("AUTHSECRET_SOURCE", "os"), ("HOME", "/root")]))
            .unwrap();

        assert_eq!(settings.source, StrongSourceKind::Os);
        assert_eq!(settings.openssl_path, "/opt/ssl/bin/openssl");
        assert_eq!(settings.layer, ConfigLayer::Environment);
    }

    #[test]
    fn test_env_validation() {
        let mut settings = Settings::default();
        assert!(settings.apply_env(env(&[("AUTHSECRET_VAR", "not valid")])).is_err());
        assert!(settings.apply_env(env(&[("AUTHSECRET_LOG", "chatty")])).is_err());
        assert_eq!(settings.var_name, "BETTER_AUTH_SECRET");
    }

    #[test]
    fn test_unrelated_env_keeps_default_layer() {
        let mut settings = Settings::default();
        settings.apply_env(env(&[("PATH", "/usr/bin")])).unwrap();
        assert_eq!(settings.layer, ConfigLayer::Default);
    }

    #[test]
    fn test_generator_slice() {
        let mut settings = Settings::default();
        settings.source = StrongSourceKind::Openssl;
        settings.openssl_path = "/usr/local/bin/openssl".to_string();

        let generator = settings.generator();
        assert_eq!(generator.source, StrongSourceKind::Openssl);
        assert_eq!(generator.openssl_path, "/usr/local/bin/openssl");
    }
}
