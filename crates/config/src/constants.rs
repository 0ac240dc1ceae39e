//! Centralized constants for the Grafana team workspace.
//!
//! Default values shared by the config, client and CLI crates.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Grafana API
// =============================================================================

/// First Grafana major version that ships the Teams API.
pub const MIN_TEAMS_API_MAJOR_VERSION: u64 = 5;

/// Username Grafana ships with out of the box.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Password Grafana ships with out of the box.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

// =============================================================================
// Configuration Files
// =============================================================================

/// Application name used for the platform config directory.
pub const APP_DIR_NAME: &str = "grafana-team";

/// File name of the profile file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";
