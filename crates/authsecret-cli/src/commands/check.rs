//! Inspect an existing secret.

use anyhow::{bail, Result};
use authsecret_secrets::{inspect, SecretKind};
use colored::Colorize;

pub fn execute(secret: &str) -> Result<()> {
    let report = inspect(secret);

    let decoded = report
        .decoded_bytes
        .map(|n| format!("{} bytes", n))
        .unwrap_or_else(|| "not base64".to_string());
    println!("{} ({} chars, {})", report.kind.to_string().bold(), report.length, decoded);

    match report.kind {
        SecretKind::StrongBase64 => Ok(()),
        SecretKind::FallbackShaped => {
            println!(
                "{} this looks like a weak fallback secret; regenerate it when possible",
                "Warning:".yellow().bold()
            );
            Ok(())
        }
        SecretKind::Unrecognized => bail!("secret is not in a recognized format"),
    }
}
