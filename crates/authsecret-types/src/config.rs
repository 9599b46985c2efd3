//! Configuration types and structures.

use serde::{Deserialize, Serialize};
use crate::enums::StrongSourceKind;

/// Settings the secret generator needs to pick its strong source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Strong source to try first
    #[serde(default)]
    pub source: StrongSourceKind,
    /// Executable used by the openssl source
    #[serde(default = "default_openssl_path")]
    pub openssl_path: String,
}

fn default_openssl_path() -> String {
    "openssl".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source: StrongSourceKind::default(),
            openssl_path: default_openssl_path(),
        }
    }
}
