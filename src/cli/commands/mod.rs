//! Command execution for the release operations.
//!
//! Every subcommand runs one operation against the GitHub API; failures are
//! reported with recovery suggestions and turned into exit code 1.

mod helpers;
mod notes;
mod previous_tag;
mod pull_request;
mod release;

use crate::EnvConfig;
use crate::cli::{Args, Command, RuntimeConfig};
use crate::error::Result;

use notes::execute_notes;
use previous_tag::execute_previous_tag;
use pull_request::execute_pull_request;
use release::execute_release;

/// Execute the command selected by the parsed arguments
pub async fn execute_command(args: Args) -> Result<i32> {
    if let Err(validation_error) = args.validate() {
        let output = super::OutputManager::new(false, false);
        output.error(&format!("Invalid arguments: {}", validation_error));
        return Ok(1);
    }

    let config = RuntimeConfig::from(&args);
    let env_config = EnvConfig::from_env();

    let result = match &args.command {
        Command::Notes(tag_args) => execute_notes(&args, tag_args, &config, &env_config).await,
        Command::Pr(tag_args) => execute_pull_request(&args, tag_args, &config, &env_config).await,
        Command::Release(tag_args) => execute_release(&args, tag_args, &config, &env_config).await,
        Command::PreviousTag(tag_args) => {
            execute_previous_tag(&args, tag_args, &config, &env_config).await
        }
    };

    match result {
        Ok(()) => Ok(0),
        Err(e) => {
            config.error_println(&format!(
                "Command '{}' failed: {}",
                args.command.name(),
                e
            ));

            if !config.is_quiet() {
                let suggestions = e.recovery_suggestions();
                if !suggestions.is_empty() {
                    config.println("\n💡 Recovery suggestions:");
                    for suggestion in suggestions {
                        config.indent(&format!("• {}", suggestion));
                    }
                }
            }

            Ok(1)
        }
    }
}
