//! User lookup endpoint.

use reqwest::Client;

use crate::auth::AuthStrategy;
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::UserLookup;

/// Look up a user by login or email.
///
/// Returns `None` when Grafana answers 404.
pub async fn lookup_user(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    login_or_email: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Option<UserLookup>> {
    let url = format!("{}/api/users/lookup", base_url);
    let builder = auth
        .apply(client.get(&url))
        .query(&[("loginOrEmail", login_or_email)]);

    match send_request(builder, "/api/users/lookup", "GET", metrics).await {
        Ok(response) => Ok(Some(response.json().await?)),
        Err(ClientError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
