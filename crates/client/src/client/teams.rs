//! Team API methods for [`GrafanaClient`].
//!
//! # What this module does NOT handle:
//! - Low-level team endpoint HTTP calls (in [`crate::endpoints`])

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ApiMessage, Team, TeamCreated};

impl GrafanaClient {
    /// Find a team by exact name.
    pub async fn search_team(&self, name: &str) -> Result<Option<Team>> {
        endpoints::search_team(
            &self.http,
            &self.base_url,
            &self.auth,
            name,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Create a team.
    pub async fn create_team(&self, name: &str, email: &str) -> Result<TeamCreated> {
        endpoints::create_team(
            &self.http,
            &self.base_url,
            &self.auth,
            name,
            email,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Update a team's name and email.
    pub async fn update_team(&self, team_id: u64, name: &str, email: &str) -> Result<ApiMessage> {
        endpoints::update_team(
            &self.http,
            &self.base_url,
            &self.auth,
            team_id,
            name,
            email,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Delete a team by id.
    pub async fn delete_team(&self, team_id: u64) -> Result<ApiMessage> {
        endpoints::delete_team(
            &self.http,
            &self.base_url,
            &self.auth,
            team_id,
            self.metrics.as_ref(),
        )
        .await
    }
}
