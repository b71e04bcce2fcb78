//! Client repository (in-memory mock store)

use crate::{error::AppError, models::client::*};
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct ClientRepository {
    store: RwLock<HashMap<Uuid, Client>>,
}

impl ClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// List all clients, newest first
    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        let store = self.store.read().await;
        let mut clients: Vec<Client> = store.values().cloned().collect();
        clients.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(clients)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, AppError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    pub async fn create(&self, req: CreateClientRequest) -> Result<Client, AppError> {
        let mut store = self.store.write().await;

        if store.values().any(|c| c.email == req.email) {
            return Err(AppError::BadRequest(format!(
                "A client with email {} already exists",
                req.email
            )));
        }

        let now = Utc::now();
        let client = Client {
            id: Uuid::new_v4(),
            first_name: req.first_name,
            last_name: req.last_name,
            dni: req.dni,
            phone: req.phone,
            email: req.email,
            address: req.address,
            notes: req.notes,
            created_at: now,
            updated_at: now,
        };
        store.insert(client.id, client.clone());
        Ok(client)
    }

    pub async fn update(
        &self,
        id: Uuid,
        req: UpdateClientRequest,
    ) -> Result<Option<Client>, AppError> {
        let mut store = self.store.write().await;

        if let Some(email) = &req.email {
            if store.values().any(|c| c.id != id && &c.email == email) {
                return Err(AppError::BadRequest(format!(
                    "A client with email {email} already exists"
                )));
            }
        }

        let Some(client) = store.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(first_name) = req.first_name {
            client.first_name = first_name;
        }
        if let Some(last_name) = req.last_name {
            client.last_name = last_name;
        }
        if let Some(dni) = req.dni {
            client.dni = dni;
        }
        if let Some(phone) = req.phone {
            client.phone = phone;
        }
        if let Some(email) = req.email {
            client.email = email;
        }
        if let Some(address) = req.address {
            client.address = address;
        }
        if req.notes.is_some() {
            client.notes = req.notes;
        }
        client.updated_at = Utc::now();

        Ok(Some(client.clone()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut store = self.store.write().await;
        Ok(store.remove(&id).is_some())
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        let store = self.store.read().await;
        Ok(store.contains_key(&id))
    }

    pub async fn count(&self) -> Result<usize, AppError> {
        let store = self.store.read().await;
        Ok(store.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_req(email: &str) -> CreateClientRequest {
        CreateClientRequest {
            first_name: "Juan".to_string(),
            last_name: "Pérez".to_string(),
            dni: "30123456".to_string(),
            phone: "+54 11 4444-5555".to_string(),
            email: email.to_string(),
            address: "Av. Corrientes 1234".to_string(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = ClientRepository::new();
        let created = repo.create(create_req("juan@example.com")).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.email, "juan@example.com");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = ClientRepository::new();
        repo.create(create_req("juan@example.com")).await.unwrap();

        let result = repo.create(create_req("juan@example.com")).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_update_partial_fields() {
        let repo = ClientRepository::new();
        let created = repo.create(create_req("juan@example.com")).await.unwrap();

        let updated = repo
            .update(
                created.id,
                UpdateClientRequest {
                    phone: Some("+54 11 9999-0000".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.phone, "+54 11 9999-0000");
        assert_eq!(updated.email, "juan@example.com");
    }

    #[tokio::test]
    async fn test_update_missing_client_returns_none() {
        let repo = ClientRepository::new();
        let result = repo.update(Uuid::new_v4(), UpdateClientRequest::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = ClientRepository::new();
        let created = repo.create(create_req("juan@example.com")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }
}
