//! `notes` command: print cleaned release notes.

use super::helpers::build_orchestrator;
use crate::EnvConfig;
use crate::cli::{Args, RuntimeConfig, TagArgs};
use crate::error::Result;
use crate::version::{ReleaseTarget, VersionTag};

pub(super) async fn execute_notes(
    args: &Args,
    tag_args: &TagArgs,
    config: &RuntimeConfig,
    env_config: &EnvConfig,
) -> Result<()> {
    let tag = VersionTag::parse(&tag_args.tag)?;
    let target = ReleaseTarget::resolve(&tag, tag_args.branch.as_deref())?;
    let orchestrator = build_orchestrator(args, env_config)?;

    config.progress_println(&format!(
        "Generating notes for {} on {} ({})",
        tag,
        orchestrator.repository(),
        target.commitish
    ));
    let notes = orchestrator.generate_release_notes(&tag, &target).await?;
    config.indent(&format!("Compared against {}", notes.previous_tag));

    config.result_println(&notes.body);
    Ok(())
}
