//! `ensure` command: make a team exist with the given email and members.

use anyhow::Result;
use grafana_client::TeamSpec;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::commands::{build_client_from_config, report_outcome};
use crate::formatters::OutputFormat;

pub struct EnsureArgs {
    pub name: String,
    pub email: String,
    pub members: Vec<String>,
    pub enforce_members: bool,
    pub skip_version_check: bool,
}

impl EnsureArgs {
    /// Membership is only managed when members are listed or enforcement is requested.
    pub fn into_spec(self) -> TeamSpec {
        let manage_members = !self.members.is_empty() || self.enforce_members;
        let mut spec = TeamSpec::present(self.name, self.email)
            .enforce_members(self.enforce_members)
            .skip_version_check(self.skip_version_check);
        if manage_members {
            spec = spec.with_members(self.members);
        }
        spec
    }
}

pub async fn run(
    config: grafana_config::Config,
    args: EnsureArgs,
    output: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = build_client_from_config(&config)?;
    let spec = args.into_spec();

    info!("Ensuring team '{}' on {}", spec.name, client.base_url());

    let outcome = cancel.run(client.reconcile_team(&spec)).await?;
    report_outcome(outcome, output)
}
