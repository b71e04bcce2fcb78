//! Authentication boundary
//! Role model, identity snapshot, and the gateway-header ingestion middleware

pub mod identity;
pub mod middleware;
pub mod role;

pub use identity::{FixedIdentity, Identity, IdentityProvider};
pub use middleware::{identity_from_headers, identity_ingest_middleware};
pub use role::{parse_roles, primary_role, Role, UnknownRole};
