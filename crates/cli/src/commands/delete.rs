//! `delete` command: make sure a team does not exist.

use anyhow::Result;
use grafana_client::TeamSpec;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::commands::{build_client_from_config, report_outcome};
use crate::formatters::OutputFormat;

pub async fn run(
    config: grafana_config::Config,
    name: &str,
    skip_version_check: bool,
    output: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = build_client_from_config(&config)?;
    let spec = TeamSpec::absent(name).skip_version_check(skip_version_check);

    info!("Removing team '{}' from {}", name, client.base_url());

    let outcome = cancel.run(client.reconcile_team(&spec)).await?;
    report_outcome(outcome, output)
}
