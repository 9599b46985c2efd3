//! Process execution utilities.

use authsecret_types::{AuthSecretError, Result};
use std::process::{Command, Stdio};

/// Captured result of a finished child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Standard output, lossily decoded
    pub stdout: String,
    /// Standard error, lossily decoded
    pub stderr: String,
    /// Exit code, `-1` when terminated by a signal
    pub code: i32,
}

impl ProcessOutput {
    /// Whether the process exited with status 0.
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Execute a command synchronously and capture its output.
///
/// The child is always waited on before this returns, whether it succeeds,
/// exits non-zero, or fails to spawn. Stdin is closed.
pub fn run(command: &str, args: &[&str]) -> Result<ProcessOutput> {
    tracing::debug!("running {} {}", command, args.join(" "));

    let output = Command::new(command)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| AuthSecretError::Process(format!("Failed to run '{}': {}", command, e)))?;

    Ok(ProcessOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        code: output.status.code().unwrap_or(-1),
    })
}
