//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Render command results as JSON or plain text.
//!
//! Does NOT handle:
//! - Printing (formatters return strings; commands write them to stdout).
//!
//! Invariants:
//! - JSON output is a single pretty-printed document.
//! - Text output lists one item per line, in the order given.

use anyhow::Result;
use clap::ValueEnum;
use grafana_client::{MembershipDelta, TaskResult, TeamReport};
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Version report for the `version` command.
#[derive(Debug, Clone, Serialize)]
pub struct VersionOutput {
    pub version: String,
    pub teams_api_supported: bool,
}

/// Formatter trait for the result types the CLI prints.
pub trait Formatter {
    fn format_task_result(&self, result: &TaskResult) -> Result<String>;
    fn format_team(&self, team: &TeamReport) -> Result<String>;
    fn format_members(&self, members: &[String]) -> Result<String>;
    fn format_delta(&self, delta: &MembershipDelta) -> Result<String>;
    fn format_version(&self, version: &VersionOutput) -> Result<String>;
}

/// Get the formatter for an output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Text => Box::new(TextFormatter),
    }
}

/// JSON formatter.
pub struct JsonFormatter;

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

impl Formatter for JsonFormatter {
    fn format_task_result(&self, result: &TaskResult) -> Result<String> {
        to_json(result)
    }

    fn format_team(&self, team: &TeamReport) -> Result<String> {
        to_json(team)
    }

    fn format_members(&self, members: &[String]) -> Result<String> {
        to_json(members)
    }

    fn format_delta(&self, delta: &MembershipDelta) -> Result<String> {
        to_json(delta)
    }

    fn format_version(&self, version: &VersionOutput) -> Result<String> {
        to_json(version)
    }
}

/// Plain text formatter.
pub struct TextFormatter;

fn push_list(out: &mut String, label: &str, items: impl IntoIterator<Item = impl AsRef<str>>) {
    for item in items {
        out.push_str(label);
        out.push_str(item.as_ref());
        out.push('\n');
    }
}

impl Formatter for TextFormatter {
    fn format_task_result(&self, result: &TaskResult) -> Result<String> {
        let mut out = String::new();
        match result {
            TaskResult::Success(report) => {
                out.push_str(if report.changed { "changed\n" } else { "ok\n" });
                if let Some(ref message) = report.message {
                    out.push_str(&format!("Message: {}\n", message));
                }
                if let Some(ref team) = report.team {
                    out.push_str(&self.format_team(team)?);
                }
                if let Some(ref delta) = report.delta {
                    out.push_str(&self.format_delta(delta)?);
                }
            }
            TaskResult::Failure(failure) => {
                out.push_str(&format!("failed ({:?}): {}\n", failure.kind, failure.msg));
            }
        }
        Ok(out)
    }

    fn format_team(&self, team: &TeamReport) -> Result<String> {
        let mut out = format!("Team: {}\n", team.team.name);
        if let Some(id) = team.team.id {
            out.push_str(&format!("ID: {}\n", id));
        }
        out.push_str(&format!("Email: {}\n", team.team.email));
        out.push_str(&format!("Members: {}\n", team.members.len()));
        push_list(&mut out, "  ", &team.members);
        Ok(out)
    }

    fn format_members(&self, members: &[String]) -> Result<String> {
        if members.is_empty() {
            return Ok("No members found.\n".to_string());
        }
        let mut out = String::new();
        push_list(&mut out, "", members);
        Ok(out)
    }

    fn format_delta(&self, delta: &MembershipDelta) -> Result<String> {
        if delta.is_empty() {
            return Ok("No membership changes.\n".to_string());
        }
        let mut out = String::new();
        push_list(&mut out, "+ ", delta.to_add());
        push_list(&mut out, "- ", delta.to_remove());
        Ok(out)
    }

    fn format_version(&self, version: &VersionOutput) -> Result<String> {
        Ok(format!(
            "Grafana {}\nTeams API: {}\n",
            version.version,
            if version.teams_api_supported {
                "supported"
            } else {
                "not supported"
            }
        ))
    }
}
