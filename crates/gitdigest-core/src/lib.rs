//! # gitdigest-core
//!
//! Core library for gitdigest, a thin wrapper around the external
//! [gitingest](https://github.com/cyclotruc/gitingest) analyzer that produces
//! a textual digest of a Git repository (summary, directory tree, file
//! contents) for consumption by an AI agent.
//!
//! There is no algorithm here: the whole job is to translate structured
//! parameters into an analyzer command line, run it, and hand back either the
//! trimmed digest or a categorized, human-readable error text.
//!
//! ## Key Types
//!
//! - [`DigestRequest`] - Parameters for one analysis run
//! - [`DigestCommand`] - Deterministic analyzer command line
//! - [`Ingestor`] - Runs the analyzer and maps failures to friendly text
//! - [`CommandRunner`] - Execution seam, swappable in tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gitdigest_core::{DigestRequest, Ingestor};
//!
//! let request = DigestRequest::new("https://github.com/user/repo".to_string())
//!     .with_include_patterns(vec!["*.rs".to_string()]);
//!
//! let ingestor = Ingestor::new();
//! let text = ingestor.digest(&request).await;
//! println!("{}", text);
//! ```
//!
//! ## Error Model
//!
//! [`Ingestor::digest`] never fails from the caller's perspective. Every
//! failure is converted into one of five fixed message templates (missing
//! executable, authentication failure, repository not found, generic command
//! failure, unexpected failure), so an agent reading the result only ever
//! sees text.

mod command;
mod error;
mod request;
mod runner;

pub use command::{DigestCommand, ANALYZER_BIN};
pub use error::DigestError;
pub use request::DigestRequest;
pub use runner::{CommandRunner, ProcessRunner, RunOutput};

/// Runs repository analyses through a [`CommandRunner`].
pub struct Ingestor {
    runner: Box<dyn CommandRunner>,
}

impl Ingestor {
    /// Ingestor backed by a real analyzer subprocess
    pub fn new() -> Self {
        Self {
            runner: Box::new(ProcessRunner),
        }
    }

    /// Ingestor backed by an injected runner (used by tests)
    pub fn with_runner(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Run one analysis and return text: either the digest with surrounding
    /// whitespace trimmed, or a categorized error message.
    pub async fn digest(&self, request: &DigestRequest) -> String {
        let command = DigestCommand::build(request);

        match self.try_digest(request, &command).await {
            Ok(text) => text,
            Err(err) => err.to_agent_text(),
        }
    }

    async fn try_digest(
        &self,
        request: &DigestRequest,
        command: &DigestCommand,
    ) -> Result<String, DigestError> {
        let output = match self.runner.run(command).await {
            Ok(output) => output,
            // With argv execution there is no shell around to say
            // "command not found"; the exec error carries that condition.
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(DigestError::MissingExecutable);
            }
            Err(err) => {
                return Err(DigestError::classify(
                    &err.to_string(),
                    &request.repository_url,
                    command.rendered(),
                ));
            }
        };

        if output.success() {
            return Ok(output.stdout.trim().to_string());
        }

        let message = if !output.stderr.trim().is_empty() {
            output.stderr.trim().to_string()
        } else if !output.stdout.trim().is_empty() {
            output.stdout.trim().to_string()
        } else {
            // Killed by a signal or exited silently: nothing to match on.
            return Err(DigestError::Unexpected(format!(
                "analyzer exited with code {} and produced no output",
                output.exit_code
            )));
        };

        Err(DigestError::classify(
            &message,
            &request.repository_url,
            command.rendered(),
        ))
    }
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::new()
    }
}
