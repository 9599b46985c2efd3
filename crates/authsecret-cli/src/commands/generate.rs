//! Print a freshly generated secret.

use anyhow::Result;
use authsecret_core::Settings;
use authsecret_secrets::{GeneratedSecret, SecretGenerator};
use authsecret_types::OutputFormat;

pub fn execute(settings: &Settings, format: OutputFormat) -> Result<()> {
    let generated = SecretGenerator::from_config(&settings.generator()).generate_detailed();
    println!("{}", render(&settings.var_name, &generated, format)?);
    Ok(())
}

/// Render a secret in the requested output format.
pub fn render(var_name: &str, generated: &GeneratedSecret, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Plain => generated.value.clone(),
        OutputFormat::Env => format!("{}={}", var_name, generated.value),
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "name": var_name,
            "secret": generated.value,
            "origin": generated.origin,
        }))?,
    })
}
