//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `GRAFANA_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Loading from profile files (see profile.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

pub const ENV_URL: &str = "GRAFANA_URL";
pub const ENV_USERNAME: &str = "GRAFANA_USERNAME";
pub const ENV_PASSWORD: &str = "GRAFANA_PASSWORD";
pub const ENV_API_KEY: &str = "GRAFANA_API_KEY";
pub const ENV_SKIP_VERIFY: &str = "GRAFANA_SKIP_VERIFY";
pub const ENV_TIMEOUT: &str = "GRAFANA_TIMEOUT";
pub const ENV_PROFILE: &str = "GRAFANA_PROFILE";
pub const ENV_CONFIG_PATH: &str = "GRAFANA_CONFIG_PATH";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_URL) {
        loader.set_base_url(Some(url));
    }
    let username = env_var_or_none(ENV_USERNAME);
    let password = env_var_or_none(ENV_PASSWORD);
    let sets_basic = username.is_some() || password.is_some();
    if let Some(username) = username {
        loader.set_username(Some(username));
    }
    if let Some(password) = password {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(token) = env_var_or_none(ENV_API_KEY) {
        loader.set_api_key(Some(SecretString::new(token.into())));
    } else if sets_basic {
        loader.prefer_basic_auth();
    }
    if let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY) {
        loader.set_skip_verify(Some(skip.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: ENV_SKIP_VERIFY.to_string(),
                message: "must be true or false".to_string(),
            }
        })?));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }

    // Only fill these in when the CLI did not set them already
    if loader.config_path().is_none()
        && let Some(config_path) = env_var_or_none(ENV_CONFIG_PATH)
    {
        loader.set_config_path(Some(std::path::PathBuf::from(config_path)));
    }
    if loader.profile_name().is_none()
        && let Some(profile) = env_var_or_none(ENV_PROFILE)
    {
        loader.set_profile_name(Some(profile));
    }

    Ok(())
}
