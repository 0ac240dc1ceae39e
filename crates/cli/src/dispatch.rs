//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Extract the configuration each command needs.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - Every networked command receives the cancellation token.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;
use crate::config_context::ConfigCommandContext;

pub(crate) async fn run_command(
    cli: Cli,
    config: ConfigCommandContext,
    cancel: &CancellationToken,
) -> Result<()> {
    let output = cli.output;

    match cli.command {
        Commands::Ensure {
            name,
            email,
            members,
            enforce_members,
            skip_version_check,
        } => {
            let config = config.into_real_config()?;
            let args = commands::ensure::EnsureArgs {
                name,
                email,
                members,
                enforce_members,
                skip_version_check,
            };
            commands::ensure::run(config, args, output, cancel).await?;
        }
        Commands::Delete {
            name,
            skip_version_check,
        } => {
            let config = config.into_real_config()?;
            commands::delete::run(config, &name, skip_version_check, output, cancel).await?;
        }
        Commands::Show { name } => {
            let config = config.into_real_config()?;
            commands::show::run(config, &name, output, cancel).await?;
        }
        Commands::Members { name } => {
            let config = config.into_real_config()?;
            commands::members::run(config, &name, output, cancel).await?;
        }
        Commands::Diff { desired, current } => {
            commands::diff::run(&desired, &current, output)?;
        }
        Commands::Version => {
            let config = config.into_real_config()?;
            commands::version::run(config, output, cancel).await?;
        }
    }

    Ok(())
}
