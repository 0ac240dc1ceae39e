//! Main Grafana REST API client and API methods.
//!
//! This module provides the primary [`GrafanaClient`] for the Grafana Teams
//! API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `health`: Health and version methods
//! - `teams`: Team search, create, update and delete
//! - `members`: Team membership methods
//! - `users`: User lookup
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Declarative team reconciliation (in [`crate::reconcile`])
//!
//! # Invariants
//! - Every request carries the configured authentication header
//! - Requests are sent once; failures surface to the caller unchanged

pub mod builder;

mod health;
mod members;
mod teams;
mod users;

use crate::auth::AuthStrategy;
use crate::metrics::MetricsCollector;

/// Grafana REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use grafana_client::{GrafanaClient, AuthStrategy};
/// use secrecy::SecretString;
///
/// let client = GrafanaClient::builder()
///     .base_url("http://localhost:3000".to_string())
///     .auth_strategy(AuthStrategy::ApiKey {
///         token: SecretString::new("glsa_token".to_string().into()),
///     })
///     .build()?;
/// ```
#[derive(Debug)]
pub struct GrafanaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth: AuthStrategy,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl GrafanaClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GrafanaClientBuilder {
        builder::GrafanaClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the client authenticates with an API key.
    pub fn is_api_key_auth(&self) -> bool {
        self.auth.is_api_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use secrecy::SecretString;

    fn api_key() -> AuthStrategy {
        AuthStrategy::ApiKey {
            token: SecretString::new("test-token".to_string().into()),
        }
    }

    #[test]
    fn test_client_builder_with_api_key() {
        let client = GrafanaClient::builder()
            .base_url("http://localhost:3000".to_string())
            .auth_strategy(api_key())
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://localhost:3000");
        assert!(client.is_api_key_auth());
    }

    #[test]
    fn test_client_builder_with_basic_auth() {
        let client = GrafanaClient::builder()
            .base_url("http://localhost:3000".to_string())
            .auth_strategy(AuthStrategy::Basic {
                username: "admin".to_string(),
                password: SecretString::new("admin".to_string().into()),
            })
            .build()
            .unwrap();

        assert!(!client.is_api_key_auth());
    }

    #[test]
    fn test_client_builder_missing_base_url() {
        let client = GrafanaClient::builder().auth_strategy(api_key()).build();
        assert!(matches!(client.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_client_builder_missing_auth() {
        let client = GrafanaClient::builder()
            .base_url("http://localhost:3000".to_string())
            .build();
        assert!(matches!(client.unwrap_err(), ClientError::AuthFailed(_)));
    }

    #[test]
    fn test_client_builder_normalizes_base_url() {
        let client = GrafanaClient::builder()
            .base_url("https://grafana.example.com/".to_string())
            .auth_strategy(api_key())
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://grafana.example.com");
    }

    #[test]
    fn test_skip_verify_with_http_url_still_builds() {
        let client = GrafanaClient::builder()
            .base_url("http://localhost:3000".to_string())
            .auth_strategy(api_key())
            .skip_verify(true)
            .build();

        assert!(client.is_ok());
    }
}
