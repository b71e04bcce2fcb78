//! Role-based access control core
//! Permission table, access predicate, and the route guard built on them

pub mod guard;
pub mod permissions;

pub use guard::{route_guard_middleware, GuardDecision, RedirectTarget, RouteGuard};
pub use permissions::{has_role, PermissionTable, PERMISSIONS};
