//! `release` command: publish the release and remove its branch.

use super::helpers::build_orchestrator;
use crate::EnvConfig;
use crate::cli::{Args, RuntimeConfig, TagArgs};
use crate::error::Result;
use crate::version::{ReleaseTarget, VersionTag};

pub(super) async fn execute_release(
    args: &Args,
    tag_args: &TagArgs,
    config: &RuntimeConfig,
    env_config: &EnvConfig,
) -> Result<()> {
    let tag = VersionTag::parse(&tag_args.tag)?;
    let target = ReleaseTarget::resolve(&tag, tag_args.branch.as_deref())?;
    let orchestrator = build_orchestrator(args, env_config)?;

    config.progress_println(&format!(
        "Publishing {} from {} on {}",
        tag,
        target.commitish,
        orchestrator.repository()
    ));
    let outcome = orchestrator
        .release(&tag, tag_args.branch.as_deref())
        .await?;

    config.success_println(&format!("Published release {}", outcome.release.tag_name));
    if outcome.branch_deleted {
        config.indent(&format!("Deleted branch {}", tag.release_branch()));
    } else {
        config.warning_println(&format!(
            "Branch {} was not deleted; remove it manually if it still exists",
            tag.release_branch()
        ));
    }

    if let Some(url) = &outcome.release.html_url {
        config.result_println(url);
    }
    Ok(())
}
