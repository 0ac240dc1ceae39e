//! `diff` command: compute membership changes offline.

use anyhow::Result;
use grafana_client::diff_members;

use crate::formatters::{OutputFormat, get_formatter};

pub fn run(desired: &[String], current: &[String], output: OutputFormat) -> Result<()> {
    let delta = diff_members(desired, current);
    print!("{}", get_formatter(output).format_delta(&delta)?);
    Ok(())
}
