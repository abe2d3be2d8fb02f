//! `previous-tag` command: print the release to compare against.

use super::helpers::{append_workflow_output, build_orchestrator};
use crate::EnvConfig;
use crate::cli::{Args, PreviousTagArgs, RuntimeConfig};
use crate::error::Result;
use crate::version::VersionTag;

/// Key written to the workflow outputs file
const OUTPUT_KEY: &str = "previous_tag";

pub(super) async fn execute_previous_tag(
    args: &Args,
    tag_args: &PreviousTagArgs,
    config: &RuntimeConfig,
    env_config: &EnvConfig,
) -> Result<()> {
    let tag = VersionTag::parse(&tag_args.tag)?;
    let orchestrator = build_orchestrator(args, env_config)?;

    let previous = orchestrator.previous_release_tag(&tag).await?;

    if let Some(path) = &tag_args.github_output {
        append_workflow_output(path, OUTPUT_KEY, &previous)?;
        log::debug!("Wrote {}={} to {}", OUTPUT_KEY, previous, path.display());
    }

    config.result_println(&previous);
    Ok(())
}
