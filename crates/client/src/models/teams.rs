//! Team models for the Grafana Teams API.

use serde::{Deserialize, Serialize};

/// A Grafana team as returned by team search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u64>,
}

/// Response of `GET /api/teams/search`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSearchResponse {
    pub total_count: u64,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub per_page: Option<u64>,
}

/// Response of `POST /api/teams`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamCreated {
    #[serde(default)]
    pub message: String,
    pub team_id: u64,
}

/// Generic `{"message": ...}` reply used by update, delete and membership calls.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

/// Body of team create and update requests.
#[derive(Debug, Clone, Serialize)]
pub struct TeamParams<'a> {
    pub name: &'a str,
    pub email: &'a str,
}
