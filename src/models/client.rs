//! Client domain model (vehicle owner)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Cliente: owner of one or more vehicles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create client request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(min = 1, max = 20))]
    pub dni: String,
    #[validate(length(min = 1, max = 30))]
    pub phone: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 200))]
    pub address: String,
    pub notes: Option<String>,
}

/// Update client request (absent fields keep their value)
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub dni: Option<String>,
    #[validate(length(min = 1, max = 30))]
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub address: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let client = Client {
            id: Uuid::new_v4(),
            first_name: "Juan".to_string(),
            last_name: "Pérez".to_string(),
            dni: "30123456".to_string(),
            phone: "+54 11 4444-5555".to_string(),
            email: "juan.perez@example.com".to_string(),
            address: "Av. Corrientes 1234".to_string(),
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(client.full_name(), "Juan Pérez");
    }

    #[test]
    fn test_create_request_rejects_bad_email() {
        let req = CreateClientRequest {
            first_name: "Juan".to_string(),
            last_name: "Pérez".to_string(),
            dni: "30123456".to_string(),
            phone: "+54 11 4444-5555".to_string(),
            email: "not-an-email".to_string(),
            address: "Av. Corrientes 1234".to_string(),
            notes: None,
        };
        assert!(req.validate().is_err());
    }
}
