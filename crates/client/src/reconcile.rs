//! Declarative team reconciliation.
//!
//! This module is responsible for:
//! - Describing the desired state of a team ([`TeamSpec`])
//! - Driving a Grafana server towards that state ([`GrafanaClient::reconcile_team`])
//! - Reporting the outcome as an explicit success or failure value ([`TaskResult`])
//!
//! # What this module does NOT handle:
//! - Computing membership changes (see [`crate::membership`])
//! - Printing results or choosing exit codes (the CLI does that)
//!
//! # Invariants
//! - Every mutation is awaited before the next one starts
//! - Member additions and removals are issued in ascending email order
//! - Members are only removed when `enforce_members` is set
//! - `changed` is true iff at least one mutating request succeeded

use serde::{Serialize, Serializer};
use tracing::info;

use crate::client::GrafanaClient;
use crate::error::{ClientError, Result};
use crate::membership::{MembershipDelta, diff_members};
use crate::models::Team;

/// Whether the team should exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamState {
    #[default]
    Present,
    Absent,
}

/// Desired state of a single team.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamSpec {
    pub name: String,
    pub email: Option<String>,
    /// Desired member emails. `None` leaves membership untouched.
    pub members: Option<Vec<String>>,
    /// Remove members that are not in `members`.
    pub enforce_members: bool,
    pub state: TeamState,
    pub skip_version_check: bool,
}

impl TeamSpec {
    /// A team that should exist with the given email.
    pub fn present(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// A team that should not exist.
    pub fn absent(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: TeamState::Absent,
            ..Self::default()
        }
    }

    pub fn with_members<I>(mut self, members: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.members = Some(members.into_iter().map(Into::into).collect());
        self
    }

    pub fn enforce_members(mut self, enforce: bool) -> Self {
        self.enforce_members = enforce;
        self
    }

    pub fn skip_version_check(mut self, skip: bool) -> Self {
        self.skip_version_check = skip;
        self
    }

    /// Reject an unusable `TeamSpec` before any request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequest`] for an empty name, or for a
    /// present team without an email.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "team name must not be empty".to_string(),
            ));
        }

        if self.state == TeamState::Present && self.email.is_none() {
            return Err(ClientError::InvalidRequest(format!(
                "email is required when team '{}' should be present",
                self.name
            )));
        }

        Ok(())
    }
}

/// A team together with its member emails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamReport {
    #[serde(flatten)]
    pub team: Team,
    pub members: Vec<String>,
}

/// Outcome of a successful reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Membership changes that were applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<MembershipDelta>,
}

/// Failure classification for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Unauthorized,
    PermissionDenied,
    NotFound,
    Conflict,
    UnsupportedVersion,
    InvalidInput,
    Error,
}

impl From<&ClientError> for FailureKind {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Unauthorized(_) | ClientError::AuthFailed(_) => Self::Unauthorized,
            ClientError::PermissionDenied(_) => Self::PermissionDenied,
            ClientError::NotFound(_) => Self::NotFound,
            ClientError::Conflict(_) => Self::Conflict,
            ClientError::UnsupportedVersion { .. } => Self::UnsupportedVersion,
            ClientError::InvalidRequest(_) | ClientError::InvalidUrl(_) => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

/// Outcome of a failed reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    pub msg: String,
    pub kind: FailureKind,
}

impl From<&ClientError> for FailureReport {
    fn from(error: &ClientError) -> Self {
        Self {
            msg: error.to_string(),
            kind: FailureKind::from(error),
        }
    }
}

/// Explicit success or failure of one reconcile task.
///
/// Serializes as `{"changed", "failed": false, ...}` on success and
/// `{"changed": false, "failed": true, "msg", "kind"}` on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    Success(ReconcileReport),
    Failure(FailureReport),
}

impl TaskResult {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Success(report) if report.changed)
    }
}

impl From<Result<ReconcileReport>> for TaskResult {
    fn from(result: Result<ReconcileReport>) -> Self {
        match result {
            Ok(report) => Self::Success(report),
            Err(e) => Self::Failure(FailureReport::from(&e)),
        }
    }
}

impl Serialize for TaskResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Success<'a> {
            failed: bool,
            #[serde(flatten)]
            report: &'a ReconcileReport,
        }

        #[derive(Serialize)]
        struct Failure<'a> {
            changed: bool,
            failed: bool,
            msg: &'a str,
            kind: FailureKind,
        }

        match self {
            Self::Success(report) => Success {
                failed: false,
                report,
            }
            .serialize(serializer),
            Self::Failure(failure) => Failure {
                changed: false,
                failed: true,
                msg: &failure.msg,
                kind: failure.kind,
            }
            .serialize(serializer),
        }
    }
}

fn team_id(team: &Team) -> Result<u64> {
    team.id.ok_or_else(|| {
        ClientError::InvalidResponse(format!("Team '{}' has no id in response", team.name))
    })
}

impl GrafanaClient {
    /// Drive the server towards `spec`.
    pub async fn reconcile_team(&self, spec: &TeamSpec) -> Result<ReconcileReport> {
        spec.validate()?;

        if !spec.skip_version_check {
            self.ensure_teams_api().await?;
        }

        match spec.state {
            TeamState::Present => self.ensure_team_present(spec).await,
            TeamState::Absent => self.ensure_team_absent(&spec.name).await,
        }
    }

    /// Read a team and its members without changing anything.
    pub async fn team_report(&self, name: &str) -> Result<Option<TeamReport>> {
        let Some(team) = self.search_team(name).await? else {
            return Ok(None);
        };
        let members = self.team_member_emails(team_id(&team)?).await?;
        Ok(Some(TeamReport { team, members }))
    }

    async fn ensure_team_present(&self, spec: &TeamSpec) -> Result<ReconcileReport> {
        let name = spec.name.as_str();
        let email = spec.email.as_deref().unwrap_or_default();
        let mut changed = false;

        let mut team = match self.search_team(name).await? {
            Some(team) => team,
            None => {
                let created = self.create_team(name, email).await?;
                info!(team = name, team_id = created.team_id, "Created team");
                changed = true;
                self.search_team(name).await?.ok_or_else(|| {
                    ClientError::InvalidResponse(format!("Team '{name}' not found after creation"))
                })?
            }
        };
        let id = team_id(&team)?;

        if team.email != email {
            self.update_team(id, name, email).await?;
            info!(team = name, email, "Updated team email");
            team.email = email.to_string();
            changed = true;
        }

        let mut members = self.team_member_emails(id).await?;
        let mut delta = None;

        if let Some(desired) = &spec.members {
            let mut planned = diff_members(desired, &members);
            if !spec.enforce_members {
                planned = planned.without_removals();
            }

            for member in planned.to_add() {
                self.add_team_member_by_email(id, member).await?;
                info!(team = name, member = member.as_str(), "Added team member");
            }
            for member in planned.to_remove() {
                self.remove_team_member_by_email(id, member).await?;
                info!(team = name, member = member.as_str(), "Removed team member");
            }

            if !planned.is_empty() {
                info!(team = name, changes = planned.len(), "Applied membership changes");
                changed = true;
                members = self.team_member_emails(id).await?;
            }
            delta = Some(planned);
        }

        Ok(ReconcileReport {
            changed,
            team: Some(TeamReport { team, members }),
            message: None,
            delta,
        })
    }

    async fn ensure_team_absent(&self, name: &str) -> Result<ReconcileReport> {
        let Some(team) = self.search_team(name).await? else {
            return Ok(ReconcileReport {
                changed: false,
                message: Some("No team found".to_string()),
                ..ReconcileReport::default()
            });
        };

        let deleted = self.delete_team(team_id(&team)?).await?;
        info!(team = name, "Deleted team");

        Ok(ReconcileReport {
            changed: true,
            message: Some(deleted.message),
            ..ReconcileReport::default()
        })
    }
}
