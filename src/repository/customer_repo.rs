//! Customer repository (in-memory mock store)

use crate::{error::AppError, models::customer::*};
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct CustomerRepository {
    store: RwLock<HashMap<Uuid, Customer>>,
}

impl CustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// List all customers, newest first
    pub async fn list(&self) -> Result<Vec<Customer>, AppError> {
        let store = self.store.read().await;
        let mut customers: Vec<Customer> = store.values().cloned().collect();
        customers.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(customers)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    pub async fn create(&self, req: CreateCustomerRequest) -> Result<Customer, AppError> {
        if !req.has_manager_role() {
            return Err(AppError::BadRequest(
                "A customer account must include the MANAGER role".to_string(),
            ));
        }

        let mut store = self.store.write().await;

        if store.values().any(|c| c.email == req.email) {
            return Err(AppError::BadRequest(format!(
                "A customer with email {} already exists",
                req.email
            )));
        }

        let now = Utc::now();
        let customer = Customer {
            id: Uuid::new_v4(),
            names: req.names,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            roles: req.roles,
            created_at: now,
            updated_at: now,
        };
        store.insert(customer.id, customer.clone());
        Ok(customer)
    }

    pub async fn update(
        &self,
        id: Uuid,
        req: UpdateCustomerRequest,
    ) -> Result<Option<Customer>, AppError> {
        let mut store = self.store.write().await;

        if let Some(email) = &req.email {
            if store.values().any(|c| c.id != id && &c.email == email) {
                return Err(AppError::BadRequest(format!(
                    "A customer with email {email} already exists"
                )));
            }
        }

        let Some(customer) = store.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(names) = req.names {
            customer.names = names;
        }
        if let Some(last_name) = req.last_name {
            customer.last_name = last_name;
        }
        if let Some(email) = req.email {
            customer.email = email;
        }
        if req.phone.is_some() {
            customer.phone = req.phone;
        }
        if let Some(roles) = req.roles {
            customer.roles = roles;
        }
        customer.updated_at = Utc::now();

        Ok(Some(customer.clone()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut store = self.store.write().await;
        Ok(store.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_req(email: &str, roles: &[&str]) -> CreateCustomerRequest {
        CreateCustomerRequest {
            names: "Carlos".to_string(),
            last_name: "Gómez".to_string(),
            email: email.to_string(),
            phone: None,
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_customer_must_be_manager() {
        let repo = CustomerRepository::new();
        let result = repo.create(create_req("carlos@talleres.test", &["CLIENT"])).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_create_manager_customer() {
        let repo = CustomerRepository::new();
        let customer =
            repo.create(create_req("carlos@talleres.test", &["MANAGER"])).await.unwrap();
        assert_eq!(customer.roles, vec!["MANAGER".to_string()]);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = CustomerRepository::new();
        repo.create(create_req("carlos@talleres.test", &["MANAGER"])).await.unwrap();

        let result = repo.create(create_req("carlos@talleres.test", &["MANAGER"])).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
