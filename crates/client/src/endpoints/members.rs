//! Team membership endpoints.

use reqwest::Client;
use tracing::debug;

use crate::auth::AuthStrategy;
use crate::endpoints::send_request;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{AddMemberParams, ApiMessage, TeamMember};

/// List the members of a team.
pub async fn list_team_members(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    team_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<TeamMember>> {
    let url = format!("{}/api/teams/{}/members", base_url, team_id);
    let builder = auth.apply(client.get(&url));
    let response = send_request(builder, "/api/teams/{id}/members", "GET", metrics).await?;

    Ok(response.json().await?)
}

/// Add a user to a team.
pub async fn add_team_member(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    team_id: u64,
    user_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<ApiMessage> {
    debug!("Adding user {} to team {}", user_id, team_id);

    let url = format!("{}/api/teams/{}/members", base_url, team_id);
    let builder = auth
        .apply(client.post(&url))
        .json(&AddMemberParams { user_id });
    let response = send_request(builder, "/api/teams/{id}/members", "POST", metrics).await?;

    Ok(response.json().await?)
}

/// Remove a user from a team.
pub async fn remove_team_member(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    team_id: u64,
    user_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<ApiMessage> {
    debug!("Removing user {} from team {}", user_id, team_id);

    let url = format!("{}/api/teams/{}/members/{}", base_url, team_id, user_id);
    let builder = auth.apply(client.delete(&url));
    let response = send_request(
        builder,
        "/api/teams/{id}/members/{user_id}",
        "DELETE",
        metrics,
    )
    .await?;

    Ok(response.json().await?)
}
