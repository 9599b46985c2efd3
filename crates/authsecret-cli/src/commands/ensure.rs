//! Populate the secret setting when it is not configured yet.

use anyhow::{Context, Result};
use authsecret_core::util::{envfile, expand_path};
use authsecret_core::Settings;
use authsecret_secrets::SecretGenerator;
use authsecret_types::{Clock, SecretOrigin, StrongSource, WeakRng};
use colored::Colorize;
use std::path::Path;

/// What `ensure` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// The variable is set in the process environment
    InEnvironment,
    /// The env file already holds a non-empty value
    AlreadyPresent,
    /// A new secret was written
    Written(SecretOrigin),
}

pub fn execute(settings: &Settings, env_file: &Path, force: bool) -> Result<()> {
    let env_file = expand_path(env_file);
    let var = settings.var_name.as_str();
    let from_env = std::env::var(var).ok();
    let mut generator = SecretGenerator::from_config(&settings.generator());

    let outcome = ensure_secret(&mut generator, &env_file, var, force, from_env.as_deref())?;

    match outcome {
        EnsureOutcome::InEnvironment => {
            println!("{} {} is set in the environment", "✓".green().bold(), var.cyan());
        }
        EnsureOutcome::AlreadyPresent => {
            println!(
                "{} {} already present in {}",
                "✓".green().bold(),
                var.cyan(),
                env_file.display()
            );
        }
        EnsureOutcome::Written(SecretOrigin::Strong) => {
            println!("{} {} in {}", "Stored".green().bold(), var.cyan(), env_file.display());
        }
        EnsureOutcome::Written(SecretOrigin::Fallback) => {
            println!(
                "{} {} in {} {}",
                "Stored".yellow().bold(),
                var.cyan(),
                env_file.display(),
                "(weak fallback value, regenerate when possible)".yellow()
            );
        }
    }

    Ok(())
}

/// Generate and store `var` in `env_file` unless a value is already configured.
///
/// `from_env` is the variable's value in the process environment, if any.
/// `force` regenerates regardless of existing values.
pub fn ensure_secret<S, R, C>(
    generator: &mut SecretGenerator<S, R, C>,
    env_file: &Path,
    var: &str,
    force: bool,
    from_env: Option<&str>,
) -> Result<EnsureOutcome>
where
    S: StrongSource,
    R: WeakRng,
    C: Clock,
{
    if !force {
        if from_env.is_some_and(|value| !value.is_empty()) {
            return Ok(EnsureOutcome::InEnvironment);
        }

        let existing = envfile::read_var(env_file, var)
            .with_context(|| format!("Failed to read {}", env_file.display()))?;
        if existing.is_some_and(|value| !value.is_empty()) {
            return Ok(EnsureOutcome::AlreadyPresent);
        }
    }

    let generated = generator.generate_detailed();
    envfile::upsert_var(env_file, var, &generated.value)
        .with_context(|| format!("Failed to update {}", env_file.display()))?;

    tracing::info!("wrote {} ({} secret) to {}", var, generated.origin, env_file.display());
    Ok(EnsureOutcome::Written(generated.origin))
}
