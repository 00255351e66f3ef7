use thiserror::Error;

/// Failure categories for one analysis run.
///
/// None of these reach the tool's caller as an error: each renders to a fixed
/// human-readable text via [`DigestError::to_agent_text`], so an agent reading
/// the result always gets prose it can act on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    #[error("gitingest executable not installed")]
    MissingExecutable,

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("repository not found: {url}")]
    RepositoryNotFound { url: String },

    #[error("analyzer command failed: {details}")]
    CommandFailed { details: String, command: String },

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl DigestError {
    /// Classify a failure by substring-matching its lower-cased error text.
    ///
    /// Check order is load-bearing: "command not found" must be matched
    /// before the bare "not found". The substrings track gitingest's own
    /// wording and that of the shells and git remotes underneath it.
    pub fn classify(message: &str, url: &str, command: &str) -> Self {
        let lower = message.to_lowercase();

        if lower.contains("command not found") || lower.contains("gitingest: not found") {
            return DigestError::MissingExecutable;
        }

        if lower.contains("authentication") || lower.contains("401") {
            return DigestError::AuthenticationFailed;
        }

        if lower.contains("not found") || lower.contains("404") {
            return DigestError::RepositoryNotFound {
                url: url.to_string(),
            };
        }

        DigestError::CommandFailed {
            details: message.to_string(),
            command: command.to_string(),
        }
    }

    /// Render the category as the text handed back to the agent.
    pub fn to_agent_text(&self) -> String {
        match self {
            DigestError::MissingExecutable => {
                "ERROR: GitIngest is not installed. Please install it with:\n  pipx install gitingest\n\nOr:\n  pip install gitingest\n\nThen verify: gitingest --version".to_string()
            }
            DigestError::AuthenticationFailed => {
                "ERROR: Authentication failed. For private repositories, provide a GitHub token:\n  - Pass github_token argument\n  - Or set GITHUB_TOKEN environment variable".to_string()
            }
            DigestError::RepositoryNotFound { url } => {
                format!(
                    "ERROR: Repository not found: {}\n\nPlease verify:\n  - The URL is correct\n  - The repository exists\n  - You have access to the repository",
                    url
                )
            }
            DigestError::CommandFailed { details, command } => {
                format!(
                    "ERROR: Failed to analyze repository\n\nDetails: {}\n\nCommand attempted: {}",
                    details, command
                )
            }
            DigestError::Unexpected(message) => {
                format!("ERROR: An unexpected error occurred: {}", message)
            }
        }
    }
}
