//! CLI structure and command definitions.

use anyhow::{Context, Result};
use authsecret_core::Settings;
use authsecret_types::{LogLevel, OutputFormat, StrongSourceKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "authsecret")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate authentication signing secrets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.authsecret/config)
    #[arg(short, long, global = true, env = "AUTHSECRET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a new secret
    Generate {
        /// Output format: plain, env or json
        #[arg(short, long, default_value = "plain")]
        format: OutputFormat,

        /// Variable name used by the env and json formats
        #[arg(long)]
        var: Option<String>,

        /// Strong source to try first: os or openssl
        #[arg(short, long)]
        source: Option<StrongSourceKind>,
    },

    /// Store a secret in an env file unless one is already configured
    Ensure {
        /// Env file to update
        #[arg(short, long, default_value = ".env")]
        env_file: PathBuf,

        /// Variable name to populate
        #[arg(long)]
        var: Option<String>,

        /// Strong source to try first: os or openssl
        #[arg(short, long)]
        source: Option<StrongSourceKind>,

        /// Replace an existing value
        #[arg(long)]
        force: bool,
    },

    /// Report the shape of an existing secret
    Check {
        /// Secret to inspect
        secret: String,
    },

    /// Show the version; with --verbose, the resolved settings
    Version,
}

impl Cli {
    /// Load settings from file and environment.
    pub fn settings(&self) -> Result<Settings> {
        Settings::load(self.config.as_deref()).context("Failed to load configuration")
    }

    /// Effective log level once global flags are applied.
    pub fn log_level(&self, configured: LogLevel) -> LogLevel {
        if self.debug {
            LogLevel::Debug
        } else if self.verbose {
            LogLevel::Info
        } else if self.quiet {
            LogLevel::Error
        } else {
            configured
        }
    }

    pub fn execute(&self, mut settings: Settings) -> Result<()> {
        use crate::commands::*;

        match &self.command {
            Commands::Generate { format, var, source } => {
                apply_overrides(&mut settings, var.as_deref(), *source)?;
                generate::execute(&settings, *format)
            }
            Commands::Ensure { env_file, var, source, force } => {
                apply_overrides(&mut settings, var.as_deref(), *source)?;
                ensure::execute(&settings, env_file, *force)
            }
            Commands::Check { secret } => {
                check::execute(secret)
            }
            Commands::Version => {
                version::execute(&settings, self.config.as_deref(), self.verbose)
            }
        }
    }
}

/// Apply command-line overrides on top of file and environment settings.
fn apply_overrides(
    settings: &mut Settings,
    var: Option<&str>,
    source: Option<StrongSourceKind>,
) -> Result<()> {
    if let Some(var) = var {
        authsecret_core::util::validate_var_name(var)?;
        settings.var_name = var.to_string();
        settings.mark_set();
    }
    if let Some(source) = source {
        settings.source = source;
        settings.mark_set();
    }
    Ok(())
}
