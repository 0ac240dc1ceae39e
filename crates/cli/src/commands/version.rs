//! `version` command: print the Grafana server version.

use anyhow::Result;
use grafana_config::constants::MIN_TEAMS_API_MAJOR_VERSION;

use crate::cancellation::CancellationToken;
use crate::commands::build_client_from_config;
use crate::formatters::{OutputFormat, VersionOutput, get_formatter};

pub async fn run(
    config: grafana_config::Config,
    output: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = build_client_from_config(&config)?;
    let version = cancel.run(client.version()).await??;

    let report = VersionOutput {
        version: version.to_string(),
        teams_api_supported: version.major >= MIN_TEAMS_API_MAJOR_VERSION,
    };
    print!("{}", get_formatter(output).format_version(&report)?);
    Ok(())
}
