//! Configuration management for the Grafana team tooling.
//!
//! This crate provides types and loaders for managing Grafana connection
//! configuration from environment variables, `.env` files and profile files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path, env_var_or_none};
pub use types::{AuthConfig, AuthStrategy, Config, ConfigFile, ConnectionConfig, ProfileConfig};
