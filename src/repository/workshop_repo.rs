//! Workshop repository (in-memory mock store)

use crate::{error::AppError, models::workshop::*};
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct WorkshopRepository {
    store: RwLock<HashMap<Uuid, Workshop>>,
}

impl WorkshopRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// List all workshops, newest first
    pub async fn list(&self) -> Result<Vec<Workshop>, AppError> {
        let store = self.store.read().await;
        let mut workshops: Vec<Workshop> = store.values().cloned().collect();
        workshops.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(workshops)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Workshop>, AppError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    pub async fn create(&self, req: CreateWorkshopRequest) -> Result<Workshop, AppError> {
        let mut store = self.store.write().await;

        let now = Utc::now();
        let workshop = Workshop {
            id: Uuid::new_v4(),
            name: req.name,
            cuit: req.cuit.unwrap_or_default(),
            status: req.status.unwrap_or(true),
            manager: req.manager,
            email: req.email,
            phone: req.phone,
            address: req.address,
            user_id: req.user_id,
            created_at: now,
            updated_at: now,
        };
        store.insert(workshop.id, workshop.clone());
        Ok(workshop)
    }

    pub async fn update(
        &self,
        id: Uuid,
        req: UpdateWorkshopRequest,
    ) -> Result<Option<Workshop>, AppError> {
        let mut store = self.store.write().await;
        let Some(workshop) = store.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(name) = req.name {
            workshop.name = name;
        }
        if let Some(cuit) = req.cuit {
            workshop.cuit = cuit;
        }
        if let Some(status) = req.status {
            workshop.status = status;
        }
        if let Some(manager) = req.manager {
            workshop.manager = manager;
        }
        if let Some(email) = req.email {
            workshop.email = email;
        }
        if let Some(phone) = req.phone {
            workshop.phone = phone;
        }
        if req.address.is_some() {
            workshop.address = req.address;
        }
        if req.user_id.is_some() {
            workshop.user_id = req.user_id;
        }
        workshop.updated_at = Utc::now();

        Ok(Some(workshop.clone()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut store = self.store.write().await;
        Ok(store.remove(&id).is_some())
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        let store = self.store.read().await;
        Ok(store.contains_key(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_req(name: &str) -> CreateWorkshopRequest {
        CreateWorkshopRequest {
            name: name.to_string(),
            cuit: Some("30-71234567-8".to_string()),
            status: None,
            manager: "María López".to_string(),
            email: "central@talleres.test".to_string(),
            phone: "+54 11 5555-0000".to_string(),
            address: Some(Address {
                street: Some("Av. Rivadavia 5500".to_string()),
                city: Some("Buenos Aires".to_string()),
                ..Default::default()
            }),
            user_id: None,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_to_active() {
        let repo = WorkshopRepository::new();
        let workshop = repo.create(create_req("Taller Central")).await.unwrap();
        assert!(workshop.status);
        assert_eq!(workshop.address.as_ref().unwrap().city.as_deref(), Some("Buenos Aires"));
    }

    #[tokio::test]
    async fn test_deactivate_workshop() {
        let repo = WorkshopRepository::new();
        let workshop = repo.create(create_req("Taller Central")).await.unwrap();

        let updated = repo
            .update(
                workshop.id,
                UpdateWorkshopRequest {
                    status: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert!(!updated.status);
    }
}
