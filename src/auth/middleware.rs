//! Identity ingestion middleware
//! Authentication happens upstream at the gateway; this layer only converts
//! the forwarded identity headers into a typed [`Identity`] request extension.

use crate::{
    auth::identity::Identity,
    auth::role::parse_roles,
    error::AppError,
    middleware::AppState,
};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use uuid::Uuid;

// Identity is extractable in handlers once the ingestion middleware ran
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Build an [`Identity`] from the gateway headers, if present.
///
/// Unknown role strings are dropped at this boundary (see
/// [`parse_roles`]); a request without the user header simply yields no
/// identity and is handled by the route guard.
pub fn identity_from_headers(
    headers: &HeaderMap,
    user_header: &str,
    email_header: &str,
    roles_header: &str,
) -> Option<Identity> {
    let user_id = headers
        .get(user_header)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s.trim()).ok())?;

    let email = headers
        .get(email_header)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .trim()
        .to_string();

    let roles = headers
        .get(roles_header)
        .and_then(|v| v.to_str().ok())
        .map(|raw| parse_roles(raw.split(',')))
        .unwrap_or_default();

    Some(Identity { user_id, email, roles })
}

/// Attach the forwarded identity to the request extensions
pub async fn identity_ingest_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    let security = &state.config.security;

    if let Some(identity) = identity_from_headers(
        req.headers(),
        &security.identity_user_header,
        &security.identity_email_header,
        &security.identity_roles_header,
    ) {
        tracing::debug!(
            user_id = %identity.user_id,
            roles = ?identity.roles,
            "Identity attached from gateway headers"
        );
        req.extensions_mut().insert(identity);
    }

    next.run(req).await
}
