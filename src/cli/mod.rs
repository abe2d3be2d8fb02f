//! Command line interface for release_orchestrator.
//!
//! Each invocation runs exactly one release operation and maps its outcome
//! to a process exit code.

mod args;
pub mod commands;
mod output;

pub use args::{Args, Command, PreviousTagArgs, RuntimeConfig, TagArgs};
pub use commands::execute_command;
pub use output::OutputManager;

use crate::error::Result;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    init_logging(&args);
    execute_command(args).await
}

/// Install the `env_logger` backend.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug output for
/// this crate and the default shows warnings only.
pub fn init_logging(args: &Args) {
    let default_filter = if args.verbose {
        "release_orchestrator=debug"
    } else {
        "release_orchestrator=warn"
    };

    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env)
        .format_target(false)
        .try_init();
}
