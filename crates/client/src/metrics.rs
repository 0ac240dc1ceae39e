//! Metrics collection for Grafana API calls.
//!
//! This module records, through the `metrics` facade:
//! - Request latency histograms
//! - Request counters
//! - Error counters by category
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (install a `metrics` recorder for that)
//!
//! # Invariants
//! - All metrics use consistent label names: `endpoint`, `method`, `status`, `error_category`
//! - Metric recording is infallible
//! - Zero-cost when no metrics recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "grafana_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "grafana_api_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "grafana_api_errors_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport-level errors (connection refused, DNS, etc.)
    Transport,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors
    Http5xx,
    /// Request timeout
    Timeout,
    /// Response body could not be decoded
    Decode,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Unauthorized(_)
            | ClientError::PermissionDenied(_)
            | ClientError::NotFound(_)
            | ClientError::Conflict(_) => ErrorCategory::Http4xx,
            ClientError::ApiError { status, .. } => {
                if (400..500).contains(status) {
                    ErrorCategory::Http4xx
                } else if (500..600).contains(status) {
                    ErrorCategory::Http5xx
                } else {
                    ErrorCategory::Unknown
                }
            }
            ClientError::InvalidResponse(_) => ErrorCategory::Decode,
            ClientError::HttpError(e) => {
                if e.is_timeout() {
                    ErrorCategory::Timeout
                } else if e.is_connect() {
                    ErrorCategory::Transport
                } else if e.is_decode() {
                    ErrorCategory::Decode
                } else {
                    ErrorCategory::Unknown
                }
            }
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for Grafana API calls.
///
/// A thin wrapper around the `metrics` macros that keeps label names consistent.
#[derive(Debug, Clone)]
pub struct MetricsCollector {
    enabled: bool,
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCollector {
    /// Create an enabled metrics collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if metrics collection is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of an API request.
    ///
    /// `status` is None when the request failed before a response arrived.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record an error.
    pub fn record_error(&self, endpoint: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_labels() {
        assert_eq!(ErrorCategory::Http4xx.as_str(), "http_4xx");
        assert_eq!(ErrorCategory::Http5xx.as_str(), "http_5xx");
        assert_eq!(ErrorCategory::Transport.as_str(), "transport");
    }

    #[test]
    fn test_categorize_client_errors() {
        let err = ClientError::Unauthorized("x".to_string());
        assert_eq!(ErrorCategory::from(&err), ErrorCategory::Http4xx);

        let err = ClientError::ApiError {
            status: 502,
            url: "http://localhost:3000/api/teams".to_string(),
            message: "Bad Gateway".to_string(),
            request_id: None,
        };
        assert_eq!(ErrorCategory::from(&err), ErrorCategory::Http5xx);

        let err = ClientError::InvalidResponse("bad".to_string());
        assert_eq!(ErrorCategory::from(&err), ErrorCategory::Decode);

        let err = ClientError::InvalidRequest("bad".to_string());
        assert_eq!(ErrorCategory::from(&err), ErrorCategory::Unknown);
    }

    #[test]
    fn test_default_collector_is_enabled() {
        assert!(MetricsCollector::default().is_enabled());
        assert_eq!(
            MetricsCollector::default().is_enabled(),
            MetricsCollector::new().is_enabled()
        );
    }

    #[test]
    fn test_disabled_collector_is_noop() {
        let collector = MetricsCollector::disabled();
        assert!(!collector.is_enabled());
        collector.record_request("/api/teams", "GET");
        collector.record_request_duration("/api/teams", "GET", Duration::from_millis(5), None);
        collector.record_error("/api/teams", "GET", ErrorCategory::Unknown);
    }

    #[test]
    fn test_enabled_without_recorder_does_not_panic() {
        let collector = MetricsCollector::new();
        assert!(collector.is_enabled());
        collector.record_request("/api/teams/search", "GET");
        collector.record_request_duration(
            "/api/teams/search",
            "GET",
            Duration::from_millis(12),
            Some(200),
        );
    }
}
