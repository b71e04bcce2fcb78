//! Customer domain model
//! A "proveedor" in the dashboard: a manager user owning one or more
//! workshops. Role strings here are account attributes, distinct from the
//! typed [`crate::auth::Role`] set used for access decisions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub names: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.names, self.last_name)
    }
}

/// Create customer request; the account must carry the MANAGER role
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 100))]
    pub names: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
    #[validate(length(min = 1))]
    pub roles: Vec<String>,
}

impl CreateCustomerRequest {
    /// Workshop owners are manager accounts by definition
    pub fn has_manager_role(&self) -> bool {
        self.roles.iter().any(|r| r == "MANAGER")
    }
}

/// Update customer request
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, max = 100))]
    pub names: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
    pub roles: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let customer = Customer {
            id: Uuid::new_v4(),
            names: "Carlos Alberto".to_string(),
            last_name: "Gómez".to_string(),
            email: "carlos@talleres.test".to_string(),
            phone: None,
            roles: vec!["MANAGER".to_string()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(customer.full_name(), "Carlos Alberto Gómez");
    }

    #[test]
    fn test_manager_role_check() {
        let req = CreateCustomerRequest {
            names: "Carlos".to_string(),
            last_name: "Gómez".to_string(),
            email: "carlos@talleres.test".to_string(),
            phone: None,
            roles: vec!["CLIENT".to_string()],
        };
        assert!(!req.has_manager_role());
    }
}
