//! Workshop (taller) domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Postal address attached to a workshop
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

/// Taller: a workshop of the service network
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workshop {
    pub id: Uuid,
    pub name: String,
    pub cuit: String,
    /// Active flag
    pub status: bool,
    pub manager: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Owning manager user, when assigned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create workshop request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkshopRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(max = 20))]
    pub cuit: Option<String>,
    pub status: Option<bool>,
    #[validate(length(min = 1, max = 120))]
    pub manager: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 30))]
    pub phone: String,
    pub address: Option<Address>,
    pub user_id: Option<Uuid>,
}

/// Update workshop request
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkshopRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(length(max = 20))]
    pub cuit: Option<String>,
    pub status: Option<bool>,
    #[validate(length(min = 1, max = 120))]
    pub manager: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 30))]
    pub phone: Option<String>,
    pub address: Option<Address>,
    pub user_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_valid_email() {
        let req = CreateWorkshopRequest {
            name: "Taller Central".to_string(),
            cuit: Some("30-71234567-8".to_string()),
            status: Some(true),
            manager: "María López".to_string(),
            email: "taller-central".to_string(),
            phone: "+54 11 5555-0000".to_string(),
            address: None,
            user_id: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_workshop_serializes_camel_case() {
        let workshop = Workshop {
            id: Uuid::new_v4(),
            name: "Taller Central".to_string(),
            cuit: "30-71234567-8".to_string(),
            status: true,
            manager: "María López".to_string(),
            email: "central@talleres.test".to_string(),
            phone: "+54 11 5555-0000".to_string(),
            address: None,
            user_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&workshop).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
