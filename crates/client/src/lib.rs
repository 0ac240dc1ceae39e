//! Grafana REST API client for team management.
//!
//! This crate provides a type-safe client for the Grafana Teams API, the
//! membership differ used to reconcile team members, and a declarative
//! team reconciler that reports changed/unchanged/failed results.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod membership;
pub mod metrics;
pub mod models;
pub mod reconcile;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::AuthStrategy;
pub use client::GrafanaClient;
pub use client::builder::GrafanaClientBuilder;
pub use error::{ClientError, Result};
pub use membership::{MembershipDelta, diff_members};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::{
    ApiMessage, GrafanaVersion, HealthInfo, Team, TeamCreated, TeamMember, TeamSearchResponse,
    UserLookup,
};
pub use reconcile::{
    FailureKind, FailureReport, ReconcileReport, TaskResult, TeamReport, TeamSpec, TeamState,
};
