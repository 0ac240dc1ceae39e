//! Authentication strategies for Grafana requests.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Strategy for authenticating with Grafana.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// HTTP basic authentication with a Grafana user.
    Basic {
        username: String,
        password: SecretString,
    },
    /// API key or service account token, sent as a bearer token.
    ApiKey { token: SecretString },
}

impl AuthStrategy {
    /// Attach the `Authorization` header for this strategy.
    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            Self::ApiKey { token } => builder.bearer_auth(token.expose_secret()),
        }
    }

    /// Check if this strategy uses an API key.
    pub fn is_api_key(&self) -> bool {
        matches!(self, Self::ApiKey { .. })
    }
}

impl From<&grafana_config::AuthStrategy> for AuthStrategy {
    fn from(strategy: &grafana_config::AuthStrategy) -> Self {
        match strategy {
            grafana_config::AuthStrategy::Basic { username, password } => Self::Basic {
                username: username.clone(),
                password: password.clone(),
            },
            grafana_config::AuthStrategy::ApiKey { token } => Self::ApiKey {
                token: token.clone(),
            },
        }
    }
}
