//! Shared test utilities for grafana-team integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount the Grafana endpoints most tests need on a mock server.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - `GRAFANA_API_KEY` is set to "test-token" unless overridden.

use assert_cmd::Command;
#[allow(unused_imports)]
pub use grafana_client::testing::load_fixture;
use wiremock::matchers::{header, method, path, query_param};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Returns a hermetic `grafana-team` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `GRAFANA_API_KEY` is set to a dummy value to satisfy config validation.
/// - Other connection env vars are cleared to avoid leakage from the host.
pub fn grafana_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("grafana-team");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("GRAFANA_API_KEY", "test-token");

    cmd.env_remove("GRAFANA_URL")
        .env_remove("GRAFANA_USERNAME")
        .env_remove("GRAFANA_PASSWORD")
        .env_remove("GRAFANA_PROFILE")
        .env_remove("GRAFANA_CONFIG_PATH")
        .env_remove("GRAFANA_TIMEOUT")
        .env_remove("GRAFANA_SKIP_VERIFY");

    cmd
}

/// Returns a hermetic command pointed at `base_url`.
#[allow(dead_code)]
pub fn grafana_cmd_with_url(base_url: &str) -> Command {
    let mut cmd = grafana_cmd();
    cmd.env("GRAFANA_URL", base_url);
    cmd
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

/// Mount the team search for `name`, requiring the test API key.
#[allow(dead_code)]
pub async fn mount_search(server: &MockServer, name: &str, fixture: &str) {
    Mock::given(method("GET"))
        .and(path("/api/teams/search"))
        .and(query_param("name", name))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture(fixture)))
        .mount(server)
        .await;
}

/// Mount the member list of team 2.
#[allow(dead_code)]
pub async fn mount_members(server: &MockServer, fixture: &str) {
    Mock::given(method("GET"))
        .and(path("/api/teams/2/members"))
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

/// Parse the JSON document a command printed on stdout.
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}
