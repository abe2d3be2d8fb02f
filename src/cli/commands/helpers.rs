//! Shared helpers for command implementations.

use crate::EnvConfig;
use crate::cli::Args;
use crate::error::{CliError, Result};
use crate::github::{GitHubClient, ReleaseOrchestrator};
use crate::source::RepositoryContext;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Build an orchestrator backed by the REST client from CLI arguments and
/// the workflow environment.
pub(super) fn build_orchestrator(
    args: &Args,
    env_config: &EnvConfig,
) -> Result<ReleaseOrchestrator<GitHubClient>> {
    let repo = args.repo.as_deref().ok_or_else(|| CliError::MissingArgument {
        argument: "--repo <OWNER/REPO> or GITHUB_REPOSITORY".to_string(),
    })?;
    let repository = RepositoryContext::parse(repo)?;

    let token = args
        .token
        .clone()
        .or_else(|| env_config.github_token())
        .ok_or_else(|| CliError::MissingArgument {
            argument: "a GitHub token via --token, GH_TOKEN or GITHUB_TOKEN".to_string(),
        })?;

    let client = GitHubClient::new(&args.api_url, token, Duration::from_secs(args.timeout))?;
    Ok(ReleaseOrchestrator::new(client, repository))
}

/// Append `key=value` to a workflow outputs file.
pub(super) fn append_workflow_output(path: &Path, key: &str, value: &str) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    writeln!(file, "{}={}", key, value)?;
    Ok(())
}
