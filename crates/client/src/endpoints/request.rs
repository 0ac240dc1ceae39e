//! Request execution and status mapping for Grafana API calls.
//!
//! This module is responsible for:
//! - Sending a prepared request exactly once
//! - Recording request, latency and error metrics
//! - Mapping non-success statuses onto [`ClientError`] variants
//!
//! # What this module does NOT handle:
//! - Retries or backoff (requests are sent once)
//! - Response body decoding (left to each endpoint)
//!
//! # Invariants
//! - 401, 403, 404 and 409 always map to their dedicated error variants
//! - Any other non-2xx status becomes [`ClientError::ApiError`] carrying the
//!   body's `message` field when one is present

use std::time::Instant;

use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::{ErrorCategory, MetricsCollector};
use crate::models::ApiMessage;

/// Response header carrying the Grafana request id, when present.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Send a request and map the response status.
///
/// `endpoint` is the path template used as a metrics label (e.g. `/api/teams/{id}`).
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }

    let start = Instant::now();
    let result = builder.send().await;
    let elapsed = start.elapsed();

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            let err = ClientError::from(e);
            if let Some(m) = metrics {
                m.record_request_duration(endpoint, method, elapsed, None);
                m.record_error(endpoint, method, ErrorCategory::from(&err));
            }
            return Err(err);
        }
    };

    let status = response.status();
    debug!(
        method,
        endpoint,
        status = status.as_u16(),
        elapsed_ms = elapsed.as_millis() as u64,
        "Grafana API call"
    );

    if let Some(m) = metrics {
        m.record_request_duration(endpoint, method, elapsed, Some(status.as_u16()));
    }

    if status.is_success() {
        return Ok(response);
    }

    let err = map_error_response(response, method).await;
    if let Some(m) = metrics {
        m.record_error(endpoint, method, ErrorCategory::from(&err));
    }
    Err(err)
}

async fn map_error_response(response: Response, method: &str) -> ClientError {
    let status = response.status();
    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    // Grafana errors are usually `{"message": "..."}`; fall back to the raw body.
    let message = serde_json::from_str::<ApiMessage>(&body)
        .ok()
        .map(|m| m.message)
        .filter(|m| !m.is_empty());

    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized(format!(
            "Unauthorized to perform action '{method}' on '{url}'"
        )),
        StatusCode::FORBIDDEN => ClientError::PermissionDenied(url),
        StatusCode::NOT_FOUND => ClientError::NotFound(url),
        StatusCode::CONFLICT => {
            ClientError::Conflict(message.unwrap_or_else(|| "Team name is taken".to_string()))
        }
        _ => ClientError::ApiError {
            status: status.as_u16(),
            url,
            message: message.unwrap_or(body),
            request_id,
        },
    }
}
