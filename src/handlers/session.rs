//! Session introspection handlers
//! The service never issues or refreshes credentials; it only echoes the
//! identity the gateway forwarded

use crate::auth::identity::Identity;
use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Current identity with its display role
pub async fn get_current_user(identity: Identity) -> impl IntoResponse {
    let primary_role = identity.primary_role();
    Json(json!({
        "user": identity,
        // Labeling only; access checks always use the full role set
        "primaryRole": primary_role,
    }))
}
