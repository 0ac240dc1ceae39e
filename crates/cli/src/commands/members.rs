//! `members` command: print the member emails of a team.

use anyhow::Result;

use crate::cancellation::CancellationToken;
use crate::commands::{build_client_from_config, require_team};
use crate::formatters::{OutputFormat, get_formatter};

pub async fn run(
    config: grafana_config::Config,
    name: &str,
    output: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = build_client_from_config(&config)?;
    let team = cancel.run(require_team(&client, name)).await??;

    print!("{}", get_formatter(output).format_members(&team.members)?);
    Ok(())
}
