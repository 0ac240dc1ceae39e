//! Health and version methods for [`GrafanaClient`].
//!
//! # What this module handles:
//! - Reading `/api/health`
//! - Parsing the server version
//! - Gating the Teams API on the server version

use tracing::debug;

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{GrafanaVersion, HealthInfo};
use grafana_config::constants::MIN_TEAMS_API_MAJOR_VERSION;

impl GrafanaClient {
    /// Get server health.
    pub async fn health(&self) -> Result<HealthInfo> {
        endpoints::get_health(&self.http, &self.base_url, &self.auth, self.metrics.as_ref()).await
    }

    /// Get the running Grafana version.
    pub async fn version(&self) -> Result<GrafanaVersion> {
        let health = self.health().await?;
        let raw = health.version.ok_or_else(|| {
            ClientError::InvalidResponse(
                "Failed to retrieve version from '/api/health'".to_string(),
            )
        })?;

        raw.parse()
            .map_err(|e| ClientError::InvalidResponse(format!("{e}")))
    }

    /// Fail unless the server supports the Teams API.
    pub async fn ensure_teams_api(&self) -> Result<GrafanaVersion> {
        let version = self.version().await?;
        debug!("Grafana version {}", version);

        if version.major < MIN_TEAMS_API_MAJOR_VERSION {
            return Err(ClientError::UnsupportedVersion {
                version: version.to_string(),
                message: format!(
                    "Teams API is available starting Grafana v{MIN_TEAMS_API_MAJOR_VERSION}"
                ),
            });
        }

        Ok(version)
    }
}
