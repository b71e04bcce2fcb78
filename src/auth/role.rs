//! Role model
//! Closed enumeration of the capability classes known to the dashboard.
//! Role strings on the wire are case-sensitive ("ADMIN", "MANAGER", "CLIENT");
//! the string form only exists at the identity-ingestion edge.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A capability class attached to an authenticated identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "MANAGER")]
    Manager,
    #[serde(rename = "CLIENT")]
    Client,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Client];

    /// Wire representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::Client => "CLIENT",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown role string at the ingestion boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "MANAGER" => Ok(Role::Manager),
            "CLIENT" => Ok(Role::Client),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Parse a list of raw role strings into the closed enum.
///
/// This is the single conversion boundary: unknown strings are logged and
/// skipped here so they never travel further into the access checks. Order
/// is preserved because the first role is the display "primary" role.
pub fn parse_roles<'a, I>(raw: I) -> Vec<Role>
where
    I: IntoIterator<Item = &'a str>,
{
    raw.into_iter()
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<Role>() {
                Ok(role) => Some(role),
                Err(e) => {
                    tracing::warn!(role = %trimmed, "Dropping unknown role string: {e}");
                    None
                }
            }
        })
        .collect()
}

/// First role of the list, used for display and labeling only.
///
/// Access decisions always consider the full role set; which role comes
/// first is a convention owned by whoever built the identity.
pub fn primary_role(user_roles: &[Role]) -> Option<Role> {
    user_roles.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_strings_are_case_sensitive() {
        assert!("admin".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err());
        assert!("ADMIN".parse::<Role>().is_ok());
    }

    #[test]
    fn test_parse_roles_skips_unknown() {
        let roles = parse_roles(["ADMIN", "SUPERUSER", "MANAGER"]);
        assert_eq!(roles, vec![Role::Admin, Role::Manager]);
    }

    #[test]
    fn test_parse_roles_trims_and_drops_empty() {
        let roles = parse_roles([" ADMIN ", "", "  "]);
        assert_eq!(roles, vec![Role::Admin]);
    }

    #[test]
    fn test_primary_role_is_first() {
        assert_eq!(primary_role(&[Role::Manager, Role::Admin]), Some(Role::Manager));
        assert_eq!(primary_role(&[]), None);
    }
}
