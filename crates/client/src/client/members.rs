//! Team membership methods for [`GrafanaClient`].
//!
//! # What this module handles:
//! - Listing team members
//! - Adding and removing members by user id or by email
//!
//! # What this module does NOT handle:
//! - Deciding which members to add or remove (see [`crate::membership`])

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ApiMessage, TeamMember};

impl GrafanaClient {
    /// List the members of a team.
    pub async fn list_team_members(&self, team_id: u64) -> Result<Vec<TeamMember>> {
        endpoints::list_team_members(
            &self.http,
            &self.base_url,
            &self.auth,
            team_id,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Email addresses of a team's members, in server order.
    pub async fn team_member_emails(&self, team_id: u64) -> Result<Vec<String>> {
        Ok(self
            .list_team_members(team_id)
            .await?
            .into_iter()
            .map(|member| member.email)
            .collect())
    }

    /// Add a user to a team by user id.
    pub async fn add_team_member(&self, team_id: u64, user_id: u64) -> Result<ApiMessage> {
        endpoints::add_team_member(
            &self.http,
            &self.base_url,
            &self.auth,
            team_id,
            user_id,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Remove a user from a team by user id.
    pub async fn remove_team_member(&self, team_id: u64, user_id: u64) -> Result<ApiMessage> {
        endpoints::remove_team_member(
            &self.http,
            &self.base_url,
            &self.auth,
            team_id,
            user_id,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Resolve `email` to a user and add them to the team.
    pub async fn add_team_member_by_email(&self, team_id: u64, email: &str) -> Result<ApiMessage> {
        let user_id = self.user_id_for_email(email).await?;
        self.add_team_member(team_id, user_id).await
    }

    /// Resolve `email` to a user and remove them from the team.
    pub async fn remove_team_member_by_email(
        &self,
        team_id: u64,
        email: &str,
    ) -> Result<ApiMessage> {
        let user_id = self.user_id_for_email(email).await?;
        self.remove_team_member(team_id, user_id).await
    }
}
