//! User lookup methods for [`GrafanaClient`].

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::UserLookup;

impl GrafanaClient {
    /// Look up a user by login or email. `None` when no such user exists.
    pub async fn lookup_user(&self, login_or_email: &str) -> Result<Option<UserLookup>> {
        endpoints::lookup_user(
            &self.http,
            &self.base_url,
            &self.auth,
            login_or_email,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Resolve an email address to a Grafana user id.
    pub async fn user_id_for_email(&self, email: &str) -> Result<u64> {
        self.lookup_user(email)
            .await?
            .map(|user| user.id)
            .ok_or_else(|| ClientError::NotFound(format!("User '{email}' does not exist")))
    }
}
