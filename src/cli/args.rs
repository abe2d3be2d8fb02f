//! Command line argument parsing and validation.

use crate::github::DEFAULT_API_URL;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Release automation for versioned branches on GitHub
#[derive(Parser, Debug)]
#[command(
    name = "release_orchestrator",
    version,
    about = "Release notes, release pull requests and GitHub releases",
    long_about = "Release notes, release pull requests and GitHub releases for repositories
with one release branch per major version (v6.* -> main, v5.* -> v5.x).

Usage:
  release_orchestrator notes --tag v6.2.0
  release_orchestrator pr --tag v6.2.0
  release_orchestrator release --tag v6.2.0
  release_orchestrator previous-tag --tag v6.2.0

The API token is read from --token, GH_TOKEN or GITHUB_TOKEN."
)]
pub struct Args {
    /// Repository as owner/repo or URL
    #[arg(long, global = true, env = "GITHUB_REPOSITORY", value_name = "OWNER/REPO")]
    pub repo: Option<String>,

    /// GitHub API root
    #[arg(long, global = true, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// API token (defaults to GH_TOKEN, then GITHUB_TOKEN)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30, value_name = "SECS")]
    pub timeout: u64,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print results and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Release operations
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print cleaned release notes for a tag
    Notes(TagArgs),
    /// Open the release pull request for a tag
    Pr(TagArgs),
    /// Publish the release for a tag and delete its release branch
    Release(TagArgs),
    /// Print the tag of the previous release in the same major line
    PreviousTag(PreviousTagArgs),
}

impl Command {
    /// Subcommand name for messages
    pub fn name(&self) -> &'static str {
        match self {
            Command::Notes(_) => "notes",
            Command::Pr(_) => "pr",
            Command::Release(_) => "release",
            Command::PreviousTag(_) => "previous-tag",
        }
    }

    /// Raw tag passed to the subcommand
    pub fn tag(&self) -> &str {
        match self {
            Command::Notes(args) | Command::Pr(args) | Command::Release(args) => &args.tag,
            Command::PreviousTag(args) => &args.tag,
        }
    }
}

/// Arguments shared by the notes, pr and release subcommands
#[derive(clap::Args, Debug, Clone)]
pub struct TagArgs {
    /// Version tag being released (e.g. v6.2.0)
    #[arg(long, value_name = "TAG")]
    pub tag: String,

    /// Target this branch instead of the one mapped from the tag
    #[arg(long, value_name = "NAME")]
    pub branch: Option<String>,
}

/// Arguments of the previous-tag subcommand
#[derive(clap::Args, Debug, Clone)]
pub struct PreviousTagArgs {
    /// Version tag being released (e.g. v6.2.0)
    #[arg(long, value_name = "TAG")]
    pub tag: String,

    /// Append `previous_tag=<tag>` to this workflow outputs file
    #[arg(long, env = "GITHUB_OUTPUT", value_name = "FILE")]
    pub github_output: Option<PathBuf>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.command.tag().trim().is_empty() {
            return Err("--tag must not be empty".to_string());
        }

        if self.timeout == 0 {
            return Err("--timeout must be at least 1 second".to_string());
        }

        if let Command::Notes(args) | Command::Pr(args) | Command::Release(args) = &self.command
            && args.branch.as_deref().is_some_and(|b| b.trim().is_empty())
        {
            return Err("--branch must not be empty".to_string());
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    output: super::OutputManager,
}

impl RuntimeConfig {
    /// Create runtime configuration
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            output: super::OutputManager::new(verbose, quiet),
        }
    }

    /// Print message
    pub fn println(&self, message: &str) {
        let _ = self.output.println(message);
    }

    /// Print progress message
    pub fn progress_println(&self, message: &str) {
        let _ = self.output.info(message);
    }

    /// Print error message (always shown)
    pub fn error_println(&self, message: &str) {
        self.output.error(message);
    }

    /// Print warning message
    pub fn warning_println(&self, message: &str) {
        let _ = self.output.warn(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        let _ = self.output.success(message);
    }

    /// Print indented text
    pub fn indent(&self, message: &str) {
        let _ = self.output.indent(message);
    }

    /// Print an operation result on stdout, even in quiet mode
    pub fn result_println(&self, message: &str) {
        let _ = self.output.result(message);
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.output.is_quiet()
    }
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self::new(args.verbose, args.quiet)
    }
}
