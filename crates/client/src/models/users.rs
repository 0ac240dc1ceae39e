//! User lookup model.

use serde::{Deserialize, Serialize};

/// Response of `GET /api/users/lookup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLookup {
    pub id: u64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub name: String,
}
