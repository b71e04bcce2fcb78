//! Sidebar navigation handler
//! Returns the navigation tree pruned to the calling identity's roles

use crate::{auth::identity::Identity, nav};
use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Navigation tree for the current identity.
///
/// Recomputed per request from the static sidebar; an identity with no
/// roles receives an empty list rather than an error.
pub async fn get_navigation(identity: Identity) -> impl IntoResponse {
    let groups = nav::filter_nav_tree(&nav::SIDEBAR, &identity.roles);

    Json(json!({
        "navGroups": groups,
    }))
}
