use std::io;
use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::DigestCommand;

/// Output captured from one analyzer run
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl RunOutput {
    pub fn new(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self {
            stdout,
            stderr,
            exit_code,
        }
    }

    /// Check if the analyzer exited successfully
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Seam between command construction and process execution.
///
/// Production code uses [`ProcessRunner`]; tests substitute a simulated
/// runner to inject failures without spawning anything.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &DigestCommand) -> io::Result<RunOutput>;
}

/// Runs the analyzer as a real child process.
///
/// The argv vector is handed to the OS directly, so pattern values reach the
/// analyzer byte-for-byte with no shell interpretation. Exactly one child is
/// spawned per call and awaited to completion; there is no retry and no
/// timeout beyond what the environment imposes.
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &DigestCommand) -> io::Result<RunOutput> {
        let start = Instant::now();

        debug!(
            program = command.program(),
            args = ?command.args(),
            "Spawning analyzer process"
        );

        let output = Command::new(command.program())
            .args(command.args())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(Stdio::null()) // Non-interactive
            .output()
            .await?;

        let exit_code = output.status.code().unwrap_or(-1);

        debug!(
            exit_code,
            duration_ms = start.elapsed().as_millis() as u64,
            "Analyzer process completed"
        );

        Ok(RunOutput::new(
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_output_success() {
        assert!(RunOutput::new("digest".to_string(), String::new(), 0).success());
        assert!(!RunOutput::new(String::new(), "boom".to_string(), 1).success());
        assert!(!RunOutput::new(String::new(), String::new(), -1).success());
    }
}
