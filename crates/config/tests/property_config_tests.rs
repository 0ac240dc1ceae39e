//! Property-based tests for configuration validation.
//!
//! # Invariants
//! - Every timeout in `1..=MAX_TIMEOUT_SECS` builds successfully.
//! - Every timeout above the maximum is rejected.
//! - Trailing slashes never survive base URL normalization.

use grafana_config::constants::MAX_TIMEOUT_SECS;
use grafana_config::{ConfigError, ConfigLoader};
use proptest::prelude::*;
use std::time::Duration;

fn loader() -> ConfigLoader {
    ConfigLoader::new()
        .with_base_url("http://localhost:3000".to_string())
        .with_api_key("token".to_string())
}

proptest! {
    #[test]
    fn prop_valid_timeouts_build(secs in 1u64..=MAX_TIMEOUT_SECS) {
        let config = loader().with_timeout(Duration::from_secs(secs)).build().unwrap();
        prop_assert_eq!(config.connection.timeout.as_secs(), secs);
    }

    #[test]
    fn prop_oversized_timeouts_rejected(secs in (MAX_TIMEOUT_SECS + 1)..u64::MAX / 2) {
        let result = loader().with_timeout(Duration::from_secs(secs)).build();
        let rejected = matches!(result, Err(ConfigError::InvalidTimeout { .. }));
        prop_assert!(rejected, "timeout of {} seconds was accepted", secs);
    }

    #[test]
    fn prop_trailing_slashes_stripped(host in "[a-z]{1,12}", slashes in 0usize..4) {
        let url = format!("https://{}.example.com{}", host, "/".repeat(slashes));
        let config = ConfigLoader::new()
            .with_base_url(url)
            .with_api_key("token".to_string())
            .build()
            .unwrap();
        prop_assert!(!config.connection.base_url.ends_with('/'));
        prop_assert_eq!(config.connection.base_url, format!("https://{}.example.com", host));
    }
}
