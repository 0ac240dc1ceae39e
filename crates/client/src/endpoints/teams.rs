//! Team endpoints.

use reqwest::Client;
use tracing::debug;

use crate::auth::AuthStrategy;
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{ApiMessage, Team, TeamCreated, TeamParams, TeamSearchResponse};

/// Find a team by exact name.
///
/// Returns `None` when no team matches. More than one match is treated as an
/// invalid response.
pub async fn search_team(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    name: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Option<Team>> {
    debug!("Searching team: {}", name);

    let url = format!("{}/api/teams/search", base_url);
    let builder = auth.apply(client.get(&url)).query(&[("name", name)]);
    let response = send_request(builder, "/api/teams/search", "GET", metrics).await?;

    let resp: TeamSearchResponse = response.json().await?;

    if resp.total_count > 1 {
        return Err(ClientError::InvalidResponse(format!(
            "Expected 1 team, got {}",
            resp.total_count
        )));
    }

    Ok(resp.teams.into_iter().next())
}

/// Create a team.
pub async fn create_team(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    name: &str,
    email: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<TeamCreated> {
    debug!("Creating team: {}", name);

    let url = format!("{}/api/teams", base_url);
    let builder = auth
        .apply(client.post(&url))
        .json(&TeamParams { name, email });
    let response = send_request(builder, "/api/teams", "POST", metrics).await?;

    Ok(response.json().await?)
}

/// Update a team's name and email.
pub async fn update_team(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    team_id: u64,
    name: &str,
    email: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<ApiMessage> {
    debug!("Updating team {}: {}", team_id, name);

    let url = format!("{}/api/teams/{}", base_url, team_id);
    let builder = auth
        .apply(client.put(&url))
        .json(&TeamParams { name, email });
    let response = send_request(builder, "/api/teams/{id}", "PUT", metrics).await?;

    Ok(response.json().await?)
}

/// Delete a team.
pub async fn delete_team(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    team_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<ApiMessage> {
    debug!("Deleting team: {}", team_id);

    let url = format!("{}/api/teams/{}", base_url, team_id);
    let builder = auth.apply(client.delete(&url));
    let response = send_request(builder, "/api/teams/{id}", "DELETE", metrics).await?;

    Ok(response.json().await?)
}
