//! Health endpoint.

use reqwest::Client;

use crate::auth::AuthStrategy;
use crate::endpoints::send_request;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::HealthInfo;

/// Get server health, including the running Grafana version.
pub async fn get_health(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    metrics: Option<&MetricsCollector>,
) -> Result<HealthInfo> {
    let url = format!("{}/api/health", base_url);

    let builder = auth.apply(client.get(&url));
    let response = send_request(builder, "/api/health", "GET", metrics).await?;

    Ok(response.json().await?)
}
