//! Integration tests for `grafana-config` through its public API.

use grafana_config::{AuthStrategy, ConfigError, ConfigLoader};
use secrecy::ExposeSecret;
use serial_test::serial;
use tempfile::TempDir;

fn write_profiles(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("config.json");
    let body = serde_json::json!({
        "profiles": {
            "ops": {
                "base_url": "https://grafana.ops.example.com",
                "username": "ops",
                "password": "ops-password",
                "timeout_seconds": 15
            }
        }
    });
    std::fs::write(&path, body.to_string()).unwrap();
    path
}

#[test]
#[serial]
fn test_full_precedence_chain() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_profiles(temp_dir.path());

    temp_env::with_vars(
        [
            ("GRAFANA_URL", None),
            ("GRAFANA_API_KEY", None),
            ("GRAFANA_USERNAME", None),
            ("GRAFANA_PASSWORD", Some("env-password")),
            ("GRAFANA_TIMEOUT", None),
        ],
        || {
            let config = ConfigLoader::new()
                .with_profile_name("ops".to_string())
                .with_config_path(path.clone())
                .from_profile()
                .unwrap()
                .from_env()
                .unwrap()
                .with_timeout(std::time::Duration::from_secs(45))
                .build()
                .unwrap();

            assert_eq!(config.connection.base_url, "https://grafana.ops.example.com");
            assert_eq!(config.connection.timeout.as_secs(), 45);
            match config.auth.strategy {
                AuthStrategy::Basic { username, password } => {
                    assert_eq!(username, "ops");
                    assert_eq!(password.expose_secret(), "env-password");
                }
                AuthStrategy::ApiKey { .. } => panic!("expected basic auth"),
            }
        },
    );
}

#[test]
fn test_error_messages_name_the_problem() {
    let err = ConfigLoader::new()
        .with_api_key("token".to_string())
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::MissingBaseUrl));
    assert!(err.to_string().contains("GRAFANA_URL"));
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_loading() {
    temp_env::with_var("DOTENV_DISABLED", Some("1"), || {
        assert!(ConfigLoader::new().load_dotenv().is_ok());
    });
}
