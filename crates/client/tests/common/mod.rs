//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Test-specific assertions or test logic

#[allow(unused_imports)]
pub use grafana_client::testing::load_fixture;

#[allow(unused_imports)]
pub use grafana_client::endpoints;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use grafana_client::{AuthStrategy, GrafanaClient};
use secrecy::SecretString;
use wiremock::matchers::{method, path, query_param};

/// API key strategy used by endpoint tests.
#[allow(dead_code)]
pub fn api_key() -> AuthStrategy {
    AuthStrategy::ApiKey {
        token: SecretString::new("test-token".to_string().into()),
    }
}

/// Client pointed at a mock server, authenticating with basic auth.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> GrafanaClient {
    GrafanaClient::builder()
        .base_url(server.uri())
        .auth_strategy(AuthStrategy::Basic {
            username: "admin".to_string(),
            password: SecretString::new("admin".to_string().into()),
        })
        .build()
        .unwrap()
}

/// Mount `GET /api/health` answering with a health fixture.
#[allow(dead_code)]
pub async fn mount_health(server: &MockServer, fixture: &str) {
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture(fixture)))
        .mount(server)
        .await;
}

/// Mount a user lookup for `email` answering with a user fixture.
#[allow(dead_code)]
pub async fn mount_user(server: &MockServer, email: &str, fixture: &str) {
    Mock::given(method("GET"))
        .and(path("/api/users/lookup"))
        .and(query_param("loginOrEmail", email))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture(fixture)))
        .mount(server)
        .await;
}
