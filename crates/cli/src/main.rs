//! grafana-team - Command-line interface for Grafana team management.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load connection configuration (CLI > environment > profile > defaults).
//! - Execute team commands via the shared client library.
//! - Print results on stdout and diagnostics on stderr.
//!
//! Does NOT handle:
//! - REST API implementation or reconciliation logic (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr so stdout only ever carries command output.
//! - The process exit code is derived from the error chain (see `error`).

mod args;
mod cancellation;
mod commands;
mod config_context;
mod dispatch;
mod error;
mod formatters;

use args::{Cli, Commands};
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use config_context::ConfigCommandContext;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use grafana_config::{Config, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // `diff` works on its arguments alone and needs no connection details
    let config_context = if matches!(cli.command, Commands::Diff { .. }) {
        ConfigCommandContext::Placeholder
    } else {
        match load_config(&cli) {
            Ok(config) => ConfigCommandContext::Real(Box::new(config)),
            Err(e) => {
                eprintln!("Failed to load configuration: {:#}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    };

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config_context, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Build the connection config with precedence CLI > environment > profile > defaults.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new();

    // Blank values are ignored to allow fallback to the environment
    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }

    if let Some(ref profile_name) = cli.profile {
        loader = loader.with_profile_name(profile_name.clone());
    }

    // Environment first so GRAFANA_PROFILE/GRAFANA_CONFIG_PATH can select the profile
    loader = loader.from_env()?;

    if loader.profile_name().is_some() {
        // Environment wins over the profile
        loader = loader.from_profile()?.from_env()?;
    }

    if let Some(ref url) = cli.url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(password.clone());
    }
    if let Some(ref api_key) = cli.api_key {
        loader = loader.with_api_key(api_key.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    let config = loader.build()?;

    if config.is_using_default_credentials() {
        tracing::warn!(
            "Using default Grafana credentials (admin/admin). \
             These are for local development only - change before production use."
        );
    }

    Ok(config)
}
