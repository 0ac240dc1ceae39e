//! Error types for the Grafana client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Grafana client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication configuration is missing or unusable.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Unexpected non-success response from Grafana.
    #[error("API error ({status}) at {url}: {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        request_id: Option<String>,
    },

    /// Credentials were rejected (HTTP 401).
    #[error("{0}")]
    Unauthorized(String),

    /// Credentials lack the required permission (HTTP 403).
    #[error("Permission Denied: {0}")]
    PermissionDenied(String),

    /// Resource not found (HTTP 404 or a failed lookup).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Request conflicts with existing state (HTTP 409).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Invalid response format from Grafana.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Caller supplied an invalid request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The server is too old for the requested API.
    #[error("{message} (server version {version})")]
    UnsupportedVersion { version: String, message: String },
}

impl ClientError {
    /// HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::Unauthorized(_) => Some(401),
            Self::PermissionDenied(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Conflict(_) => Some(409),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ClientError::Unauthorized(String::new()).status(), Some(401));
        assert_eq!(
            ClientError::PermissionDenied(String::new()).status(),
            Some(403)
        );
        assert_eq!(ClientError::Conflict(String::new()).status(), Some(409));
        assert_eq!(ClientError::NotFound(String::new()).status(), Some(404));
        assert_eq!(ClientError::InvalidRequest(String::new()).status(), None);

        let err = ClientError::ApiError {
            status: 500,
            url: "http://localhost:3000/api/teams".to_string(),
            message: "boom".to_string(),
            request_id: None,
        };
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_api_error_display_includes_request_id() {
        let err = ClientError::ApiError {
            status: 500,
            url: "http://localhost:3000/api/teams".to_string(),
            message: "Internal error".to_string(),
            request_id: Some("abc123".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("Internal error"));
        assert!(msg.contains("[Request ID: abc123]"));
    }

    #[test]
    fn test_unsupported_version_display() {
        let err = ClientError::UnsupportedVersion {
            version: "4.6.0".to_string(),
            message: "Teams API is available starting Grafana v5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Teams API is available starting Grafana v5 (server version 4.6.0)"
        );
    }
}
