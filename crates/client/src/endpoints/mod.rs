//! REST API endpoint implementations.
//!
//! One free function per Grafana call. Each takes the shared HTTP client,
//! the normalized base URL, the auth strategy and an optional metrics
//! collector, and funnels the request through [`send_request`].

mod health;
mod members;
mod request;
mod teams;
mod users;

pub use health::get_health;
pub use members::{add_team_member, list_team_members, remove_team_member};
pub use request::{REQUEST_ID_HEADER, send_request};
pub use teams::{create_team, delete_team, search_team, update_team};
pub use users::lookup_user;
