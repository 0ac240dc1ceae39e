//! Profile file loading for configuration.
//!
//! Responsibilities:
//! - Resolve the profile file path (explicit path or platform config dir).
//! - Load a named profile and apply it to a ConfigLoader instance.
//!
//! Invariants:
//! - Profile settings are applied before environment variables (env vars take precedence).
//! - A missing file or missing profile is recorded, not raised, so env/CLI values can still win.

use std::path::{Path, PathBuf};

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::types::{ConfigFile, ProfileConfig};

/// Returns the default path to the profile file.
///
/// - Linux: `~/.config/grafana-team/config.json`
/// - macOS: `~/Library/Application Support/grafana-team/config.json`
/// - Windows: `%AppData%\grafana-team\config\config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_DIR_NAME).ok_or_else(|| {
        ConfigError::ConfigDirUnavailable("no home directory could be determined".to_string())
    })?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Read and parse a profile file.
pub(crate) fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply the selected profile to the loader.
pub fn apply_profile(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let profile_name = match loader.profile_name() {
        Some(name) => name.clone(),
        None => return Ok(()),
    };

    let config_path = match loader.config_path() {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "Profile file does not exist");
        loader.set_profile_missing(Some(profile_name));
        return Ok(());
    }

    let file = read_config_file(&config_path)?;
    match file.profiles.get(&profile_name) {
        Some(profile) => {
            tracing::debug!(profile = %profile_name, "Applying profile");
            apply_profile_config(loader, profile);
        }
        None => loader.set_profile_missing(Some(profile_name)),
    }

    Ok(())
}

fn apply_profile_config(loader: &mut ConfigLoader, profile: &ProfileConfig) {
    if let Some(url) = &profile.base_url {
        loader.set_base_url(Some(url.clone()));
    }
    if let Some(username) = &profile.username {
        loader.set_username(Some(username.clone()));
    }
    if let Some(password) = &profile.password {
        loader.set_password(Some(password.clone()));
    }
    if let Some(token) = &profile.api_key {
        loader.set_api_key(Some(token.clone()));
    } else if profile.username.is_some() || profile.password.is_some() {
        loader.prefer_basic_auth();
    }
    if let Some(skip) = profile.skip_verify {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = profile.timeout_seconds {
        loader.set_timeout(Some(std::time::Duration::from_secs(secs)));
    }
}
