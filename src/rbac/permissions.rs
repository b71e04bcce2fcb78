//! Permission table and access predicate
//! Static route-key -> allowed-roles mapping with deny-by-default lookup

use crate::auth::role::Role;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Check whether the user holds at least one of the allowed roles.
///
/// Pure set-intersection test: order and duplicates in `user_roles` do not
/// matter. An empty `allowed` list grants nobody; an entry like that in the
/// table is a configuration mistake, not an open door.
pub fn has_role(user_roles: &[Role], allowed: &[Role]) -> bool {
    user_roles.iter().any(|role| allowed.contains(role))
}

/// Static mapping from route key to the roles allowed to enter it.
///
/// Built once at startup and never mutated afterwards. Route keys missing
/// from the table are denied for everyone.
#[derive(Debug, Clone, Default)]
pub struct PermissionTable {
    entries: HashMap<String, Vec<Role>>,
}

impl PermissionTable {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// The permission table of the dashboard routes
    pub fn with_defaults() -> Self {
        use Role::*;

        let mut table = Self::new();
        // Dashboard - all authenticated users
        table.insert("/", &[Admin, Manager, Client]);
        // Proveedores - admin only
        table.insert("/customers", &[Admin]);
        // Talleres
        table.insert("/workshops", &[Admin, Manager]);
        // Clientes
        table.insert("/all-clients", &[Admin, Manager]);
        // Vehículos
        table.insert("/all-vehicles", &[Admin, Manager]);
        // Servicios
        table.insert("/all-services", &[Admin, Manager]);
        // Settings pages - all authenticated users
        table.insert("/settings", &[Admin, Manager, Client]);
        table.insert("/settings/account", &[Admin, Manager, Client]);
        table.insert("/settings/appearance", &[Admin, Manager, Client]);
        table.insert("/settings/notifications", &[Admin, Manager, Client]);
        table.insert("/settings/display", &[Admin, Manager, Client]);
        table
    }

    /// Register a route key with its allowed roles.
    ///
    /// An empty role list makes the route permanently inaccessible; that is
    /// flagged as a configuration smell but stored as-is, since the lookup
    /// semantics already deny it.
    pub fn insert(&mut self, route_key: &str, allowed: &[Role]) {
        if allowed.is_empty() {
            tracing::warn!(route_key, "Permission entry with empty role set grants nobody");
        }
        self.entries.insert(route_key.to_string(), allowed.to_vec());
    }

    /// Allowed roles for a route key, `None` when unmapped
    pub fn allowed_roles(&self, route_key: &str) -> Option<&[Role]> {
        self.entries.get(route_key).map(|roles| roles.as_slice())
    }

    /// Decide access for a route key. Unmapped keys are denied for every
    /// role set (fail closed).
    pub fn has_permission(&self, user_roles: &[Role], route_key: &str) -> bool {
        match self.allowed_roles(route_key) {
            Some(allowed) => has_role(user_roles, allowed),
            None => false,
        }
    }

    /// Resolve a request path to the route key governing it.
    ///
    /// Exact matches win; otherwise the longest mapped ancestor applies, so
    /// `/customers/42` falls under `/customers` while `/settings/account`
    /// keeps its own entry. The root key only governs the root path itself,
    /// never acts as a catch-all. Paths with no mapped ancestor resolve to
    /// `None` and are denied downstream.
    pub fn route_key_for<'a>(&self, path: &'a str) -> Option<&'a str> {
        let normalized = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        let mut candidate = normalized;
        while !candidate.is_empty() {
            if self.entries.contains_key(candidate) {
                return Some(candidate);
            }
            match candidate.rfind('/') {
                // Walking past the first segment would land on the root
                // catch-all, which deny-by-default forbids
                Some(0) | None => break,
                Some(idx) => candidate = &candidate[..idx],
            }
        }
        None
    }
}

/// Process-wide table instance used by the HTTP layer
pub static PERMISSIONS: Lazy<PermissionTable> = Lazy::new(PermissionTable::with_defaults);
