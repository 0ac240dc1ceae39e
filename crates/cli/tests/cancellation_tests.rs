//! Integration tests for graceful Ctrl+C/SIGINT handling.
//!
//! These tests are Unix-only because they send SIGINT to a child process.
//! We assert:
//! - exit code is 130
//! - stderr contains the cancellation message

#![cfg(unix)]

use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn grafana_team_bin() -> &'static std::path::Path {
    assert_cmd::cargo::cargo_bin!("grafana-team")
}

fn send_sigint(pid: u32) {
    // SAFETY: standard Unix kill syscall
    unsafe {
        libc::kill(pid as i32, libc::SIGINT);
    }
}

#[tokio::test]
async fn test_ctrl_c_during_request_exits_130_with_message() {
    let server = MockServer::start().await;

    let request_seen = Arc::new(Notify::new());
    let request_seen_clone = Arc::clone(&request_seen);

    // Health check hangs so the signal arrives mid-request
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(move |_req: &wiremock::Request| {
            request_seen_clone.notify_one();
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(60))
                .set_body_json(serde_json::json!({ "version": "6.0.0" }))
        })
        .mount(&server)
        .await;

    let child = tokio::process::Command::new(grafana_team_bin())
        .env("DOTENV_DISABLED", "1")
        .env("GRAFANA_URL", server.uri())
        .env("GRAFANA_API_KEY", "test-token")
        .env_remove("GRAFANA_PROFILE")
        .env_remove("GRAFANA_CONFIG_PATH")
        .args(["ensure", "MyTestTeam", "--email", "email@test.com"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn grafana-team");

    let pid = child.id().expect("child pid");
    tokio::time::timeout(Duration::from_secs(5), request_seen.notified())
        .await
        .expect("health request was not sent");

    send_sigint(pid);

    let output = tokio::time::timeout(Duration::from_secs(10), child.wait_with_output())
        .await
        .expect("grafana-team did not exit after SIGINT")
        .expect("wait for grafana-team");

    assert_eq!(output.status.code(), Some(130));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Operation cancelled by user"),
        "stderr was: {stderr}"
    );
}
