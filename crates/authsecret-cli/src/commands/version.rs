//! Show the version and, with `--verbose`, the resolved generator settings.

use anyhow::Result;
use authsecret_core::util::expand_path;
use authsecret_core::Settings;
use authsecret_types::StrongSourceKind;
use colored::Colorize;
use std::path::Path;

pub fn execute(settings: &Settings, config: Option<&Path>, verbose: bool) -> Result<()> {
    println!("{} {}", "authsecret".cyan().bold(), authsecret_core::VERSION);

    if verbose {
        println!();
        for (label, value) in details(settings, config) {
            println!("  {:<15} {}", format!("{}:", label), value);
        }
    }

    Ok(())
}

/// Settings summary as `(label, value)` rows.
pub fn details(settings: &Settings, config: Option<&Path>) -> Vec<(&'static str, String)> {
    let config_file = match config.map(expand_path).or_else(Settings::default_path) {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (not found)", path.display()),
        None => "none".to_string(),
    };

    let mut rows = vec![
        ("Config file", config_file),
        ("Resolved from", format!("{:?}", settings.layer).to_lowercase()),
        ("Strong source", settings.source.to_string()),
    ];
    if settings.source == StrongSourceKind::Openssl {
        rows.push(("OpenSSL", settings.openssl_path.clone()));
    }
    rows.push(("Variable", settings.var_name.clone()));
    rows.push(("Log level", settings.log_level.to_string()));
    rows
}
