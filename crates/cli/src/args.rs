//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build configuration (see `main`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "grafana-team")]
#[command(about = "Manage Grafana teams and their members", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  grafana-team ensure platform --email platform@example.com --member a@example.com --member b@example.com\n  grafana-team ensure platform --email platform@example.com --member a@example.com --enforce-members\n  grafana-team delete platform\n  grafana-team show platform --output text\n  grafana-team diff --desired a@example.com --current b@example.com\n  grafana-team --profile production version\n"
)]
pub struct Cli {
    /// Base URL of the Grafana server (e.g., http://localhost:3000)
    #[arg(long, global = true, env = "GRAFANA_URL")]
    pub url: Option<String>,

    /// Username for basic authentication
    #[arg(short, long, global = true, env = "GRAFANA_USERNAME")]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(short, long, global = true, env = "GRAFANA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// API key or service account token (preferred over username/password)
    #[arg(short = 'k', long, global = true, env = "GRAFANA_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "GRAFANA_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "GRAFANA_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Profile name to load from config file
    #[arg(long, global = true, env = "GRAFANA_PROFILE")]
    pub profile: Option<String>,

    /// Path to a custom configuration file (overrides default location)
    #[arg(long, global = true, env = "GRAFANA_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "json")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Make sure a team exists with the given email and members
    Ensure {
        /// Team name
        name: String,

        /// Team email address
        #[arg(long)]
        email: String,

        /// Desired member email (repeatable). Without --member or --enforce-members,
        /// membership is left untouched.
        #[arg(short, long = "member", value_name = "EMAIL")]
        members: Vec<String>,

        /// Remove members that are not listed with --member
        #[arg(long)]
        enforce_members: bool,

        /// Do not check the Grafana version before changing anything
        #[arg(long)]
        skip_version_check: bool,
    },

    /// Make sure a team does not exist
    Delete {
        /// Team name
        name: String,

        /// Do not check the Grafana version before changing anything
        #[arg(long)]
        skip_version_check: bool,
    },

    /// Show a team and its members
    Show {
        /// Team name
        name: String,
    },

    /// List the member emails of a team
    Members {
        /// Team name
        name: String,
    },

    /// Compute membership changes between two lists without contacting Grafana
    Diff {
        /// Desired member emails
        #[arg(long, num_args = 0.., value_name = "EMAIL")]
        desired: Vec<String>,

        /// Current member emails
        #[arg(long, num_args = 0.., value_name = "EMAIL")]
        current: Vec<String>,
    },

    /// Show the Grafana server version and Teams API support
    Version,
}
