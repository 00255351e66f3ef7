use std::fmt;

use crate::DigestRequest;

/// Name of the external analyzer executable
pub const ANALYZER_BIN: &str = "gitingest";

/// The argument list for one analyzer invocation.
///
/// Built deterministically from a [`DigestRequest`]: the repository URL as a
/// positional argument, `-i`/`-e` pairs for each pattern in input order, then
/// `-s`, `-b` and `-t` when set, and always `-o -` last so output goes to
/// stdout instead of a file.
///
/// Execution uses the argv vector directly, so values containing shell
/// metacharacters are passed through byte-for-byte with no shell involved.
/// The [`Display`](fmt::Display) rendering is a shell-style string with
/// pattern values double-quoted, used for logs, dry-run output and the
/// generic-failure message; it is never executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestCommand {
    args: Vec<String>,
    rendered: String,
}

impl DigestCommand {
    pub fn build(request: &DigestRequest) -> Self {
        let mut args = vec![request.repository_url.clone()];
        let mut rendered = format!("{} {}", ANALYZER_BIN, request.repository_url);

        for pattern in &request.include_patterns {
            args.push("-i".to_string());
            args.push(pattern.clone());
            rendered.push_str(&format!(" -i \"{}\"", pattern));
        }

        for pattern in &request.exclude_patterns {
            args.push("-e".to_string());
            args.push(pattern.clone());
            rendered.push_str(&format!(" -e \"{}\"", pattern));
        }

        if let Some(bytes) = request.max_file_size {
            args.push("-s".to_string());
            args.push(bytes.to_string());
            rendered.push_str(&format!(" -s {}", bytes));
        }

        if let Some(ref branch) = request.branch {
            args.push("-b".to_string());
            args.push(branch.clone());
            rendered.push_str(&format!(" -b {}", branch));
        }

        if let Some(ref token) = request.github_token {
            args.push("-t".to_string());
            args.push(token.clone());
            rendered.push_str(&format!(" -t {}", token));
        }

        args.push("-o".to_string());
        args.push("-".to_string());
        rendered.push_str(" -o -");

        Self { args, rendered }
    }

    /// The executable to spawn
    pub fn program(&self) -> &str {
        ANALYZER_BIN
    }

    /// The argument vector, without the program name
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The shell-style rendering of the full command
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

impl fmt::Display for DigestCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rendered)
    }
}
