use serde::{Deserialize, Serialize};

/// Parameters supplied by the caller for one analysis run.
///
/// Constructed per invocation, consumed to build the analyzer command line,
/// then discarded. The repository URL is always present and non-empty; every
/// other field is absent unless explicitly supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestRequest {
    /// Git repository URL (GitHub, GitLab, etc.)
    pub repository_url: String,
    /// File patterns to include (Unix shell-style wildcards), in input order
    #[serde(default)]
    pub include_patterns: Vec<String>,
    /// File patterns to exclude, in input order
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
    /// Maximum file size in bytes to process
    #[serde(default)]
    pub max_file_size: Option<u64>,
    /// Branch to analyze; `None` means the repository's default branch
    #[serde(default)]
    pub branch: Option<String>,
    /// GitHub personal access token for private repositories
    #[serde(default)]
    pub github_token: Option<String>,
}

impl DigestRequest {
    /// The caller must supply a non-empty repository URL; an empty one would
    /// build an analyzer command with a blank positional argument.
    pub fn new(repository_url: String) -> Self {
        debug_assert!(
            !repository_url.is_empty(),
            "repository URL must be non-empty"
        );
        Self {
            repository_url,
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
            max_file_size: None,
            branch: None,
            github_token: None,
        }
    }

    pub fn with_include_patterns(mut self, patterns: Vec<String>) -> Self {
        self.include_patterns = patterns;
        self
    }

    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = Some(bytes);
        self
    }

    pub fn with_branch(mut self, branch: String) -> Self {
        self.branch = Some(branch);
        self
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.github_token = Some(token);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_with_only_the_url() {
        let request = DigestRequest::new("https://github.com/user/repo".to_string());

        assert_eq!(request.repository_url, "https://github.com/user/repo");
        assert!(request.include_patterns.is_empty());
        assert!(request.exclude_patterns.is_empty());
        assert!(request.max_file_size.is_none());
        assert!(request.branch.is_none());
        assert!(request.github_token.is_none());
    }

    #[test]
    #[should_panic(expected = "repository URL must be non-empty")]
    fn test_new_rejects_empty_url_in_debug_builds() {
        DigestRequest::new(String::new());
    }
}
