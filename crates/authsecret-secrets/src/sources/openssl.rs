//! `openssl rand -base64 32` as a strong source.
//!
//! Needs an `openssl` executable, so it is only used when asked for.

use authsecret_core::util::process;
use authsecret_types::{AuthSecretError, Result, StrongSource};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::SECRET_BYTES;

/// Strong source backed by the openssl CLI.
#[derive(Debug, Clone)]
pub struct OpensslRand {
    program: String,
}

impl OpensslRand {
    /// Use the given executable (a name on `PATH` or a full path).
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl Default for OpensslRand {
    fn default() -> Self {
        Self::new("openssl")
    }
}

impl StrongSource for OpensslRand {
    fn name(&self) -> &'static str {
        "openssl"
    }

    fn secret(&mut self) -> Result<String> {
        let bytes = SECRET_BYTES.to_string();
        let output = process::run(&self.program, &["rand", "-base64", &bytes])
            .map_err(|e| AuthSecretError::StrongSource(e.to_string()))?;

        if !output.success() {
            return Err(AuthSecretError::StrongSource(format!(
                "{} exited with status {}: {}",
                self.program,
                output.code,
                output.stderr.trim()
            )));
        }

        let secret = output.stdout.trim().to_string();
        match STANDARD.decode(&secret) {
            Ok(decoded) if decoded.len() == SECRET_BYTES => Ok(secret),
            Ok(decoded) => Err(AuthSecretError::StrongSource(format!(
                "{} returned {} bytes, expected {}",
                self.program,
                decoded.len(),
                SECRET_BYTES
            ))),
            Err(e) => Err(AuthSecretError::StrongSource(format!(
                "{} returned invalid base64: {}",
                self.program, e
            ))),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn fake_openssl(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("openssl");
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_accepts_and_trims_valid_output() {
        let dir = TempDir::new().unwrap();
        let secret = STANDARD.encode([7u8; SECRET_BYTES]);
        let program = fake_openssl(&dir, &format!("echo '  {}  '", secret));

        let mut source = OpensslRand::new(program.to_string_lossy());
        assert_eq!(source.secret().unwrap(), secret);
    }

    #[test]
    fn test_non_zero_exit() {
        let dir = TempDir::new().unwrap();
        let program = fake_openssl(&dir, "echo 'no entropy' >&2; exit 1");

        let err = OpensslRand::new(program.to_string_lossy()).secret().unwrap_err();
        assert!(matches!(err, AuthSecretError::StrongSource(_)));
        assert!(err.to_string().contains("no entropy"));
    }

    #[test]
    fn test_wrong_length_output() {
        let dir = TempDir::new().unwrap();
        let short = STANDARD.encode([1u8; 16]);
        let program = fake_openssl(&dir, &format!("echo {}", short));

        let err = OpensslRand::new(program.to_string_lossy()).secret().unwrap_err();
        assert!(err.to_string().contains("16 bytes"));
    }

    #[test]
    fn test_missing_executable() {
        let err = OpensslRand::new("/nonexistent/openssl").secret().unwrap_err();
        assert!(matches!(err, AuthSecretError::StrongSource(_)));
    }
}
