//! Secret protection tests for credentials held by the client.
//!
//! Verifies that API keys and passwords never show up in `Debug` output or
//! in error messages.
//!
//! What this module does NOT handle:
//! - Secret storage at rest (profile files are the user's responsibility)

mod common;

use common::*;
use grafana_client::{AuthStrategy, ClientError, GrafanaClient, endpoints};
use secrecy::{ExposeSecret, SecretString};
use wiremock::matchers::{method, path};

const SECRET_TOKEN: &str = "glsa_secret-api-key-12345";
const SECRET_PASSWORD: &str = "hunter2-very-secret";

#[test]
fn test_api_key_not_in_debug_output() {
    let strategy = AuthStrategy::ApiKey {
        token: SecretString::new(SECRET_TOKEN.to_string().into()),
    };

    let debug_output = format!("{:?}", strategy);

    assert!(
        !debug_output.contains(SECRET_TOKEN),
        "Debug output leaked the API key: {}",
        debug_output
    );
    assert!(debug_output.contains("ApiKey"));
}

#[test]
fn test_basic_password_not_in_debug_output() {
    let strategy = AuthStrategy::Basic {
        username: "admin".to_string(),
        password: SecretString::new(SECRET_PASSWORD.to_string().into()),
    };

    let debug_output = format!("{:?}", strategy);

    assert!(!debug_output.contains(SECRET_PASSWORD));
    assert!(debug_output.contains("admin"));
}

#[test]
fn test_client_debug_hides_credentials() {
    let client = GrafanaClient::builder()
        .base_url("http://localhost:3000".to_string())
        .auth_strategy(AuthStrategy::ApiKey {
            token: SecretString::new(SECRET_TOKEN.to_string().into()),
        })
        .build()
        .unwrap();

    assert!(!format!("{:?}", client).contains(SECRET_TOKEN));
}

#[test]
fn test_secret_still_usable_after_clone() {
    let strategy = AuthStrategy::ApiKey {
        token: SecretString::new(SECRET_TOKEN.to_string().into()),
    };

    match strategy.clone() {
        AuthStrategy::ApiKey { token } => assert_eq!(token.expose_secret(), SECRET_TOKEN),
        AuthStrategy::Basic { .. } => panic!("unexpected strategy"),
    }
}

#[tokio::test]
async fn test_unauthorized_error_does_not_echo_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(load_fixture("health/unauthorized.json")),
        )
        .mount(&mock_server)
        .await;

    let auth = AuthStrategy::Basic {
        username: "admin".to_string(),
        password: SecretString::new(SECRET_PASSWORD.to_string().into()),
    };
    let client = Client::new();
    let err = endpoints::get_health(&client, &mock_server.uri(), &auth, None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Unauthorized(_)));
    let rendered = format!("{} {:?}", err, err);
    assert!(!rendered.contains(SECRET_PASSWORD));
}
