//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs for SIGINT handling).
//!
//! Invariants:
//! - Exit codes 1-7 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use grafana_client::ClientError;

/// Structured exit codes for grafana-team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - invalid or missing credentials.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ConnectionError = 3,

    /// Resource not found - team or user.
    NotFound = 4,

    /// Validation error - bad input, unusable response or unsupported Grafana version.
    ValidationError = 5,

    /// Permission denied - insufficient privileges.
    PermissionDenied = 6,

    /// Conflict - e.g. the team name is already taken.
    Conflict = 7,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::AuthFailed(_) => ExitCode::AuthenticationFailed,

            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }

            ClientError::InvalidRequest(_)
            | ClientError::InvalidResponse(_)
            | ClientError::UnsupportedVersion { .. } => ExitCode::ValidationError,

            // Everything else is classified by its HTTP status
            other => match other.status() {
                Some(401) => ExitCode::AuthenticationFailed,
                Some(400) => ExitCode::ValidationError,
                Some(403) => ExitCode::PermissionDenied,
                Some(404) => ExitCode::NotFound,
                Some(409) => ExitCode::Conflict,
                _ => ExitCode::GeneralError,
            },
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ClientError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map_or(ExitCode::GeneralError, ExitCode::from)
    }
}
