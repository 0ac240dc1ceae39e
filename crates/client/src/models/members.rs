//! Team member models.

use serde::{Deserialize, Serialize};

/// Member record from `GET /api/teams/{id}/members`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(default)]
    pub org_id: u64,
    #[serde(default)]
    pub team_id: u64,
    pub user_id: u64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Body of `POST /api/teams/{id}/members`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberParams {
    pub user_id: u64,
}
