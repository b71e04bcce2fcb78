//! Service repository (in-memory mock store)
//! Recomputes part line totals and the service total on every write

use crate::{error::AppError, models::service::*};
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct ServiceRepository {
    store: RwLock<HashMap<Uuid, Service>>,
}

impl ServiceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// List all services, most recent service date first
    pub async fn list(&self) -> Result<Vec<Service>, AppError> {
        let store = self.store.read().await;
        let mut services: Vec<Service> = store.values().cloned().collect();
        services.sort_by(|a, b| b.service_date.cmp(&a.service_date));
        Ok(services)
    }

    /// Service history of one vehicle, most recent first
    pub async fn list_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<Service>, AppError> {
        let store = self.store.read().await;
        let mut services: Vec<Service> =
            store.values().filter(|s| s.vehicle_id == vehicle_id).cloned().collect();
        services.sort_by(|a, b| b.service_date.cmp(&a.service_date));
        Ok(services)
    }

    /// Services performed at one workshop, most recent first
    pub async fn list_by_workshop(&self, workshop_id: Uuid) -> Result<Vec<Service>, AppError> {
        let store = self.store.read().await;
        let mut services: Vec<Service> =
            store.values().filter(|s| s.workshop_id == workshop_id).cloned().collect();
        services.sort_by(|a, b| b.service_date.cmp(&a.service_date));
        Ok(services)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Service>, AppError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    pub async fn create(&self, req: CreateServiceRequest) -> Result<Service, AppError> {
        let now = Utc::now();
        let id = Uuid::new_v4();

        let parts: Vec<ServicePart> =
            req.parts.into_iter().map(|input| input.into_part(id)).collect();
        let total = total_cost(&parts, req.labor_cost);

        let service = Service {
            id,
            workshop_id: req.workshop_id,
            vehicle_id: req.vehicle_id,
            service_date: req.service_date,
            service_types: req.service_types,
            description: req.description,
            parts,
            labor_cost: req.labor_cost,
            total_cost: total,
            mileage: req.mileage,
            technician_name: req.technician_name,
            photos: req.photos,
            next_service_date: req.next_service_date,
            next_service_mileage: req.next_service_mileage,
            status: req.status.unwrap_or(ServiceStatus::Pending),
            notes: req.notes,
            created_at: now,
            updated_at: now,
        };

        let mut store = self.store.write().await;
        store.insert(service.id, service.clone());
        Ok(service)
    }

    pub async fn update(
        &self,
        id: Uuid,
        req: UpdateServiceRequest,
    ) -> Result<Option<Service>, AppError> {
        let mut store = self.store.write().await;
        let Some(service) = store.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(service_date) = req.service_date {
            service.service_date = service_date;
        }
        if let Some(service_types) = req.service_types {
            service.service_types = service_types;
        }
        if let Some(description) = req.description {
            service.description = description;
        }
        if let Some(parts) = req.parts {
            service.parts = parts.into_iter().map(|input| input.into_part(id)).collect();
        }
        if let Some(labor_cost) = req.labor_cost {
            service.labor_cost = labor_cost;
        }
        if let Some(mileage) = req.mileage {
            service.mileage = mileage;
        }
        if let Some(technician_name) = req.technician_name {
            service.technician_name = technician_name;
        }
        if req.photos.is_some() {
            service.photos = req.photos;
        }
        if req.next_service_date.is_some() {
            service.next_service_date = req.next_service_date;
        }
        if req.next_service_mileage.is_some() {
            service.next_service_mileage = req.next_service_mileage;
        }
        if let Some(status) = req.status {
            service.status = status;
        }
        if req.notes.is_some() {
            service.notes = req.notes;
        }

        // Totals always derive from the current parts and labor
        service.total_cost = total_cost(&service.parts, service.labor_cost);
        service.updated_at = Utc::now();

        Ok(Some(service.clone()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut store = self.store.write().await;
        Ok(store.remove(&id).is_some())
    }
}
