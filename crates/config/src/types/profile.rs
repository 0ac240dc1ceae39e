//! Profile file types.
//!
//! Responsibilities:
//! - Define `ProfileConfig` for storing named connection profiles.
//! - Define the on-disk `ConfigFile` layout (`{"profiles": {...}}`).
//!
//! Does NOT handle:
//! - Profile loading or merging (see `loader` module).
//!
//! Invariants:
//! - All profile fields are optional to allow partial profile definitions.
//! - Unknown top-level keys in the file are ignored.

use std::collections::BTreeMap;

use secrecy::SecretString;
use serde::Deserialize;

use super::auth::secret_string;

/// Named connection profile.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Base URL of the Grafana server
    pub base_url: Option<String>,
    /// Username for basic authentication
    pub username: Option<String>,
    /// Password for basic authentication
    #[serde(deserialize_with = "secret_string::deserialize_opt")]
    pub password: Option<SecretString>,
    /// API key for bearer authentication
    #[serde(deserialize_with = "secret_string::deserialize_opt")]
    pub api_key: Option<SecretString>,
    /// Whether to skip TLS verification
    pub skip_verify: Option<bool>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
}

/// Contents of the profile file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub profiles: BTreeMap<String, ProfileConfig>,
}
