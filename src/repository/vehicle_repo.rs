//! Vehicle repository (in-memory mock store)

use crate::{error::AppError, models::vehicle::*};
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct VehicleRepository {
    store: RwLock<HashMap<Uuid, Vehicle>>,
}

impl VehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// List all vehicles, newest first
    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        let store = self.store.read().await;
        let mut vehicles: Vec<Vehicle> = store.values().cloned().collect();
        vehicles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(vehicles)
    }

    /// Vehicles owned by one client, newest first
    pub async fn list_by_client(&self, client_id: Uuid) -> Result<Vec<Vehicle>, AppError> {
        let store = self.store.read().await;
        let mut vehicles: Vec<Vehicle> =
            store.values().filter(|v| v.client_id == client_id).cloned().collect();
        vehicles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(vehicles)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    pub async fn create(&self, req: CreateVehicleRequest) -> Result<Vehicle, AppError> {
        let mut store = self.store.write().await;

        if store.values().any(|v| v.license == req.license) {
            return Err(AppError::BadRequest(format!(
                "A vehicle with license plate {} already exists",
                req.license
            )));
        }

        let now = Utc::now();
        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            client_id: req.client_id,
            brand: req.brand,
            model: req.model,
            year: req.year,
            license: req.license,
            color: req.color,
            vehicle_type: req.vehicle_type,
            current_mileage: req.current_mileage,
            fuel_type: req.fuel_type,
            created_at: now,
            updated_at: now,
        };
        store.insert(vehicle.id, vehicle.clone());
        Ok(vehicle)
    }

    pub async fn update(
        &self,
        id: Uuid,
        req: UpdateVehicleRequest,
    ) -> Result<Option<Vehicle>, AppError> {
        let mut store = self.store.write().await;

        if let Some(license) = &req.license {
            if store.values().any(|v| v.id != id && &v.license == license) {
                return Err(AppError::BadRequest(format!(
                    "A vehicle with license plate {license} already exists"
                )));
            }
        }

        let Some(vehicle) = store.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(brand) = req.brand {
            vehicle.brand = brand;
        }
        if let Some(model) = req.model {
            vehicle.model = model;
        }
        if let Some(year) = req.year {
            vehicle.year = year;
        }
        if let Some(license) = req.license {
            vehicle.license = license;
        }
        if let Some(color) = req.color {
            vehicle.color = color;
        }
        if let Some(vehicle_type) = req.vehicle_type {
            vehicle.vehicle_type = vehicle_type;
        }
        if let Some(current_mileage) = req.current_mileage {
            vehicle.current_mileage = current_mileage;
        }
        if let Some(fuel_type) = req.fuel_type {
            vehicle.fuel_type = fuel_type;
        }
        vehicle.updated_at = Utc::now();

        Ok(Some(vehicle.clone()))
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

    fn create_req(client_id: Uuid, license: &str) -> CreateVehicleRequest {
        CreateVehicleRequest {
            client_id,
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2020,
            license: license.to_string(),
            color: "Gris".to_string(),
            vehicle_type: VehicleType::Car,
            current_mileage: 30_000,
            fuel_type: FuelType::Gasoline,
        }
    }

    #[tokio::test]
    async fn test_list_by_client_filters_other_owners() {
        let repo = VehicleRepository::new();
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();

        repo.create(create_req(owner, "AA111AA")).await.unwrap();
        repo.create(create_req(owner, "BB222BB")).await.unwrap();
        repo.create(create_req(other, "CC333CC")).await.unwrap();

        let owned = repo.list_by_client(owner).await.unwrap();
        assert_eq!(owned.len(), 2);
        assert!(owned.iter().all(|v| v.client_id == owner));
    }

    #[tokio::test]
    async fn test_duplicate_license_rejected() {
        let repo = VehicleRepository::new();
        let client = Uuid::new_v4();
        repo.create(create_req(client, "AA111AA")).await.unwrap();

        let result = repo.create(create_req(client, "AA111AA")).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_update_mileage() {
        let repo = VehicleRepository::new();
        let created = repo.create(create_req(Uuid::new_v4(), "AA111AA")).await.unwrap();

        let updated = repo
            .update(
                created.id,
                UpdateVehicleRequest {
                    current_mileage: Some(45_000),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.current_mileage, 45_000);
        assert_eq!(updated.license, "AA111AA");
    }
}
