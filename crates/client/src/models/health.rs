//! Health endpoint model and Grafana version parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Response of `GET /api/health`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthInfo {
    #[serde(default)]
    pub commit: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Grafana server version as `major.minor.rev`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct GrafanaVersion {
    pub major: u64,
    pub minor: u64,
    pub rev: u64,
}

impl GrafanaVersion {
    pub const fn new(major: u64, minor: u64, rev: u64) -> Self {
        Self { major, minor, rev }
    }
}

impl fmt::Display for GrafanaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.rev)
    }
}

/// A version string that is not `major[.minor[.rev]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVersionError(pub String);

impl fmt::Display for ParseVersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid Grafana version '{}'", self.0)
    }
}

impl std::error::Error for ParseVersionError {}

impl FromStr for GrafanaVersion {
    type Err = ParseVersionError;

    /// Accepts `10.2.3`, `10.2.0-pre`, `9.5.3+security-01` and `v8.1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVersionError(s.to_string());

        let core = s
            .trim()
            .trim_start_matches('v')
            .split(['-', '+'])
            .next()
            .unwrap_or_default();

        let mut parts = core.split('.');
        let mut component = |required: bool| -> Result<u64, ParseVersionError> {
            match parts.next() {
                Some(part) => part.parse().map_err(|_| err()),
                None if required => Err(err()),
                None => Ok(0),
            }
        };

        let major = component(true)?;
        let minor = component(false)?;
        let rev = component(false)?;
        Ok(Self { major, minor, rev })
    }
}
