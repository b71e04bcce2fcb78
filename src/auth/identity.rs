//! Authenticated identity
//! The identity is produced upstream (auth gateway); this service only reads it

use crate::auth::role::{primary_role, Role};
use serde::Serialize;
use uuid::Uuid;

/// The authenticated actor and its role set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
    /// Ordered role list; the first entry is the display "primary" role
    pub roles: Vec<Role>,
}

impl Identity {
    /// Display role, never used for access decisions
    pub fn primary_role(&self) -> Option<Role> {
        primary_role(&self.roles)
    }
}

/// Read accessor for the current identity.
///
/// The route guard takes this as an injected capability instead of reaching
/// into ambient session state, so tests can substitute a fixed identity.
pub trait IdentityProvider {
    /// Snapshot of the current identity, `None` when unauthenticated
    fn current_identity(&self) -> Option<Identity>;
}

/// Provider backed by an already-resolved identity snapshot
#[derive(Debug, Clone, Default)]
pub struct FixedIdentity(pub Option<Identity>);

impl IdentityProvider for FixedIdentity {
    fn current_identity(&self) -> Option<Identity> {
        self.0.clone()
    }
}
