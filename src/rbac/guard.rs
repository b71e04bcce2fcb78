//! Route guard
//! Converts the boolean access decision into a navigation effect. The guard
//! is the only place a permission check turns into a redirect; the predicate
//! itself stays a pure function.

use crate::{
    auth::identity::{Identity, IdentityProvider},
    middleware::AppState,
    rbac::permissions::PermissionTable,
};
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// Where a denied navigation is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// No identity present: back to the sign-in screen
    SignIn,
    /// Identity present but lacks a required role
    Unauthorized,
}

impl RedirectTarget {
    /// Dashboard location of the target view
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::SignIn => "/sign-in-2",
            RedirectTarget::Unauthorized => "/errors/unauthorized",
        }
    }
}

/// Outcome of guarding one navigation attempt.
///
/// A redirect is an ordinary value here, not an unwound exception: the
/// caller pattern-matches and aborts the transition itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// The transition proceeds
    Allow,
    /// Abort the transition and navigate to `to`; `return_to` carries the
    /// originally requested location for the post-sign-in return trip
    Redirect {
        to: RedirectTarget,
        return_to: Option<String>,
    },
}

impl GuardDecision {
    /// Decide a navigation attempt from an identity snapshot.
    ///
    /// Terminal outcomes mirror the navigation state machine: missing
    /// identity or an empty role set redirects to sign-in with the requested
    /// location preserved; a failed role check redirects to the unauthorized
    /// view; otherwise the transition is allowed.
    pub fn decide(
        table: &PermissionTable,
        identity: Option<&Identity>,
        route_key: &str,
        requested: &str,
    ) -> Self {
        let identity = match identity {
            Some(identity) if !identity.roles.is_empty() => identity,
            _ => {
                return GuardDecision::Redirect {
                    to: RedirectTarget::SignIn,
                    return_to: Some(requested.to_string()),
                }
            }
        };

        if table.has_permission(&identity.roles, route_key) {
            GuardDecision::Allow
        } else {
            tracing::warn!(
                user_id = %identity.user_id,
                route_key,
                roles = ?identity.roles,
                "Route permission denied"
            );
            GuardDecision::Redirect {
                to: RedirectTarget::Unauthorized,
                return_to: None,
            }
        }
    }

    /// Render the decision as an HTTP effect (`303 See Other` on redirect)
    pub fn into_response_for(self, next: Response) -> Response {
        match self {
            GuardDecision::Allow => next,
            GuardDecision::Redirect { to, return_to } => redirect_response(to, return_to),
        }
    }
}

fn redirect_response(to: RedirectTarget, return_to: Option<String>) -> Response {
    let location = match return_to {
        Some(requested) => format!("{}?redirect={}", to.path(), requested),
        None => to.path().to_string(),
    };

    match location.parse::<header::HeaderValue>() {
        Ok(value) => {
            (StatusCode::SEE_OTHER, [(header::LOCATION, value)]).into_response()
        }
        // A requested path that cannot be a header value loses the return
        // trip but still lands on the target view
        Err(_) => (
            StatusCode::SEE_OTHER,
            [(header::LOCATION, header::HeaderValue::from_static("/sign-in-2"))],
        )
            .into_response(),
    }
}

/// Guard bound to an identity source, for embedding outside the HTTP layer
pub struct RouteGuard<P: IdentityProvider> {
    table: PermissionTable,
    provider: P,
}

impl<P: IdentityProvider> RouteGuard<P> {
    pub fn new(table: PermissionTable, provider: P) -> Self {
        Self { table, provider }
    }

    /// Check the current identity against a route key.
    ///
    /// Reads a snapshot of the identity at call time; later identity changes
    /// do not affect an already-made decision.
    pub fn check(&self, route_key: &str) -> GuardDecision {
        let identity = self.provider.current_identity();
        GuardDecision::decide(&self.table, identity.as_ref(), route_key, route_key)
    }
}

/// Axum layer enforcing the permission table on every protected route.
///
/// Runs after identity ingestion and before any handler, so a protected
/// view is never rendered for a denied request.
pub async fn route_guard_middleware(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    let identity = req.extensions().get::<Identity>().cloned();

    let route_key = state
        .permissions
        .route_key_for(path.strip_prefix("/api/v1").unwrap_or(&path));

    let decision = match route_key {
        Some(key) => GuardDecision::decide(&state.permissions, identity.as_ref(), key, &path),
        // Unmapped routes fail closed; without an identity they still go to
        // sign-in first
        None => match identity {
            Some(identity) if !identity.roles.is_empty() => {
                tracing::warn!(path = %path, "Request for route missing from permission table");
                GuardDecision::Redirect { to: RedirectTarget::Unauthorized, return_to: None }
            }
            _ => GuardDecision::Redirect {
                to: RedirectTarget::SignIn,
                return_to: Some(path.clone()),
            },
        },
    };

    match decision {
        GuardDecision::Allow => next.run(req).await,
        redirect => redirect.into_response_for(().into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::identity::FixedIdentity;
    use crate::auth::role::Role;
    use uuid::Uuid;

    fn identity(roles: &[Role]) -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: "user@taller.test".to_string(),
            roles: roles.to_vec(),
        }
    }

    #[test]
    fn test_no_identity_redirects_to_sign_in_with_return() {
        let guard = RouteGuard::new(PermissionTable::with_defaults(), FixedIdentity(None));

        let decision = guard.check("/workshops");
        assert_eq!(
            decision,
            GuardDecision::Redirect {
                to: RedirectTarget::SignIn,
                return_to: Some("/workshops".to_string()),
            }
        );
    }

    #[test]
    fn test_empty_role_set_treated_as_unauthenticated() {
        let guard = RouteGuard::new(
            PermissionTable::with_defaults(),
            FixedIdentity(Some(identity(&[]))),
        );

        match guard.check("/") {
            GuardDecision::Redirect { to: RedirectTarget::SignIn, .. } => {}
            other => panic!("expected sign-in redirect, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_role_redirects_to_unauthorized() {
        let guard = RouteGuard::new(
            PermissionTable::with_defaults(),
            FixedIdentity(Some(identity(&[Role::Manager]))),
        );

        let decision = guard.check("/customers");
        assert_eq!(
            decision,
            GuardDecision::Redirect {
                to: RedirectTarget::Unauthorized,
                return_to: None,
            }
        );
    }

    #[test]
    fn test_matching_role_allows() {
        let guard = RouteGuard::new(
            PermissionTable::with_defaults(),
            FixedIdentity(Some(identity(&[Role::Admin, Role::Manager]))),
        );

        assert_eq!(guard.check("/customers"), GuardDecision::Allow);
        assert_eq!(guard.check("/workshops"), GuardDecision::Allow);
    }

    #[test]
    fn test_unmapped_route_denied_even_for_admin() {
        let guard = RouteGuard::new(
            PermissionTable::with_defaults(),
            FixedIdentity(Some(identity(&[Role::Admin]))),
        );

        match guard.check("/reports") {
            GuardDecision::Redirect { to: RedirectTarget::Unauthorized, .. } => {}
            other => panic!("expected unauthorized redirect, got {other:?}"),
        }
    }

    #[test]
    fn test_redirect_targets() {
        assert_eq!(RedirectTarget::SignIn.path(), "/sign-in-2");
        assert_eq!(RedirectTarget::Unauthorized.path(), "/errors/unauthorized");
    }
}
