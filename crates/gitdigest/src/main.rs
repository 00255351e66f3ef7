use anyhow::Result;
use clap::{Parser, ValueEnum};

use gitdigest_core::{DigestCommand, DigestRequest, Ingestor};

mod logging;
use logging::{init_tracing, LogFormat};

#[derive(Parser, Debug)]
#[command(
    name = "gitdigest",
    about = "Digest a Git repository with gitingest for AI analysis",
    long_about = "Analyzes a Git repository with the external gitingest tool and prints a \
structured digest of the codebase: repository summary, directory tree, and file contents, \
optimized for AI consumption.\n\nPrerequisite: gitingest must be installed \
(pipx install gitingest) and on PATH.",
    version
)]
struct Cli {
    /// Git repository URL (GitHub, GitLab, etc.). Example: https://github.com/user/repo
    url: String,

    /// File pattern to include (Unix shell-style wildcards, repeatable).
    /// Example: -i '*.py' -i '*.md'
    #[arg(short = 'i', long = "include", value_name = "PATTERN")]
    include: Vec<String>,

    /// File pattern to exclude (repeatable). Example: -e 'node_modules/*'
    #[arg(short = 'e', long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Maximum file size in bytes to process
    #[arg(short = 's', long = "max-file-size", value_name = "BYTES")]
    max_file_size: Option<u64>,

    /// Branch to analyze (defaults to the repository's default branch)
    #[arg(short = 'b', long)]
    branch: Option<String>,

    /// GitHub personal access token for private repositories.
    /// gitingest itself also reads the GITHUB_TOKEN environment variable.
    #[arg(short = 't', long)]
    token: Option<String>,

    /// Output request and result as JSON
    #[arg(long)]
    json: bool,

    /// Print the analyzer command without executing it
    #[arg(long)]
    dry_run: bool,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: LogFormatChoice,

    /// Log level filter (RUST_LOG overrides this)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatChoice {
    Pretty,
    Json,
    Compact,
}

impl From<LogFormatChoice> for LogFormat {
    fn from(choice: LogFormatChoice) -> Self {
        match choice {
            LogFormatChoice::Pretty => LogFormat::Pretty,
            LogFormatChoice::Json => LogFormat::Json,
            LogFormatChoice::Compact => LogFormat::Compact,
        }
    }
}

fn build_request(cli: &Cli) -> DigestRequest {
    let mut request = DigestRequest::new(cli.url.clone())
        .with_include_patterns(cli.include.clone())
        .with_exclude_patterns(cli.exclude.clone());

    if let Some(bytes) = cli.max_file_size {
        request = request.with_max_file_size(bytes);
    }
    if let Some(ref branch) = cli.branch {
        request = request.with_branch(branch.clone());
    }
    if let Some(ref token) = cli.token {
        request = request.with_token(token.clone());
    }

    request
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.log_format.into());

    let request = build_request(&cli);

    if cli.dry_run {
        println!("{}", DigestCommand::build(&request));
        return Ok(());
    }

    let ingestor = Ingestor::new();
    let result = ingestor.digest(&request).await;

    if cli.json {
        let payload = serde_json::json!({
            "request": request,
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", result);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_declaration_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_request_url_only() {
        let cli = Cli::parse_from(["gitdigest", "https://github.com/user/repo"]);
        let request = build_request(&cli);

        assert_eq!(request.repository_url, "https://github.com/user/repo");
        assert!(request.include_patterns.is_empty());
        assert!(request.exclude_patterns.is_empty());
        assert!(request.max_file_size.is_none());
        assert!(request.branch.is_none());
        assert!(request.github_token.is_none());
    }

    #[test]
    fn test_build_request_full() {
        let cli = Cli::parse_from([
            "gitdigest",
            "https://github.com/user/repo",
            "-i",
            "*.py",
            "-i",
            "*.md",
            "-e",
            "dist/*",
            "-s",
            "51200",
            "-b",
            "develop",
            "-t",
            "ghp_secret",
        ]);
        let request = build_request(&cli);

        assert_eq!(request.include_patterns, ["*.py", "*.md"]);
        assert_eq!(request.exclude_patterns, ["dist/*"]);
        assert_eq!(request.max_file_size, Some(51200));
        assert_eq!(request.branch.as_deref(), Some("develop"));
        assert_eq!(request.github_token.as_deref(), Some("ghp_secret"));
    }

    #[test]
    fn test_dry_run_command_rendering() {
        let cli = Cli::parse_from([
            "gitdigest",
            "https://github.com/user/repo",
            "-i",
            "*.rs",
            "--dry-run",
        ]);
        let request = build_request(&cli);

        assert_eq!(
            DigestCommand::build(&request).to_string(),
            "gitingest https://github.com/user/repo -i \"*.rs\" -o -"
        );
    }
}
