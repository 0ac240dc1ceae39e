//! Data models for Grafana API responses.

mod health;
mod members;
mod teams;
mod users;

pub use health::{GrafanaVersion, HealthInfo, ParseVersionError};
pub use members::{AddMemberParams, TeamMember};
pub use teams::{ApiMessage, Team, TeamCreated, TeamParams, TeamSearchResponse};
pub use users::UserLookup;
