//! CLI command implementations.

pub mod delete;
pub mod diff;
pub mod ensure;
pub mod members;
pub mod show;
pub mod version;

use anyhow::{Context, Result};
use grafana_client::{
    ClientError, FailureReport, GrafanaClient, MetricsCollector, ReconcileReport, TaskResult,
    TeamReport,
};
use grafana_config::Config;

use crate::formatters::{OutputFormat, get_formatter};

/// Build a client from the loaded configuration.
pub fn build_client_from_config(config: &Config) -> Result<GrafanaClient> {
    GrafanaClient::builder()
        .from_config(config)
        .metrics(MetricsCollector::new())
        .build()
        .context("Failed to build Grafana client")
}

/// Print a reconcile outcome and turn failures into an error for the exit code.
///
/// The task result is printed on success and on failure, so stdout always
/// carries a `changed`/`failed` document.
pub fn report_outcome(
    outcome: grafana_client::Result<ReconcileReport>,
    output: OutputFormat,
) -> Result<()> {
    let formatter = get_formatter(output);
    match outcome {
        Ok(report) => {
            print!("{}", formatter.format_task_result(&TaskResult::Success(report))?);
            Ok(())
        }
        Err(e) => {
            let failure = TaskResult::Failure(FailureReport::from(&e));
            print!("{}", formatter.format_task_result(&failure)?);
            Err(e.into())
        }
    }
}

/// Fetch a team report, treating a missing team as an error.
pub async fn require_team(client: &GrafanaClient, name: &str) -> Result<TeamReport> {
    client
        .team_report(name)
        .await?
        .ok_or_else(|| ClientError::NotFound(format!("Team '{}' not found", name)).into())
}
