//! `pr` command: open the release pull request.

use super::helpers::build_orchestrator;
use crate::EnvConfig;
use crate::cli::{Args, RuntimeConfig, TagArgs};
use crate::error::Result;
use crate::version::{ReleaseTarget, VersionTag};

pub(super) async fn execute_pull_request(
    args: &Args,
    tag_args: &TagArgs,
    config: &RuntimeConfig,
    env_config: &EnvConfig,
) -> Result<()> {
    let tag = VersionTag::parse(&tag_args.tag)?;
    let target = ReleaseTarget::resolve(&tag, tag_args.branch.as_deref())?;
    let orchestrator = build_orchestrator(args, env_config)?;

    config.progress_println(&format!(
        "Opening {} -> {} on {}",
        tag.release_branch(),
        target.branch,
        orchestrator.repository()
    ));
    let pull_request = orchestrator
        .generate_pr(&tag, tag_args.branch.as_deref())
        .await?;

    config.success_println(&format!("Opened pull request #{}", pull_request.number));
    config.result_println(&pull_request.html_url);
    Ok(())
}
