//! Maintenance service domain model
//! Carries the parts/labor cost arithmetic: part totals and the service
//! total are always recomputed server-side, never trusted from the client.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl ServiceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Pending => "Pendiente",
            ServiceStatus::InProgress => "En Progreso",
            ServiceStatus::Completed => "Completado",
            ServiceStatus::Cancelled => "Cancelado",
        }
    }
}

/// A part used during a service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePart {
    pub id: Uuid,
    pub service_id: Uuid,
    pub part_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_code: Option<String>,
    pub quantity: u32,
    pub unit_price: f64,
    /// quantity * unit_price, computed on write
    pub total_price: f64,
}

/// A maintenance record for a vehicle at a workshop
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    /// Workshop where the service was performed (required)
    pub workshop_id: Uuid,
    /// Serviced vehicle (required)
    pub vehicle_id: Uuid,
    pub service_date: NaiveDate,
    /// Free-form service type tags
    pub service_types: Vec<String>,
    pub description: String,
    pub parts: Vec<ServicePart>,
    pub labor_cost: f64,
    /// Σ part totals + labor, computed on write
    pub total_cost: f64,
    pub mileage: u32,
    pub technician_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_service_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_service_mileage: Option<u32>,
    pub status: ServiceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Part input for create/update
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ServicePartInput {
    #[validate(length(min = 1, max = 120))]
    pub part_name: String,
    pub part_code: Option<String>,
    #[validate(range(min = 1))]
    pub quantity: u32,
    #[validate(range(min = 0.0))]
    pub unit_price: f64,
}

impl ServicePartInput {
    /// Materialize the part for a service, computing its line total
    pub fn into_part(self, service_id: Uuid) -> ServicePart {
        let total_price = self.unit_price * self.quantity as f64;
        ServicePart {
            id: Uuid::new_v4(),
            service_id,
            part_name: self.part_name,
            part_code: self.part_code,
            quantity: self.quantity,
            unit_price: self.unit_price,
            total_price,
        }
    }
}

/// Create service request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub workshop_id: Uuid,
    pub vehicle_id: Uuid,
    pub service_date: NaiveDate,
    #[validate(length(min = 1))]
    pub service_types: Vec<String>,
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
    #[validate(nested)]
    pub parts: Vec<ServicePartInput>,
    #[validate(range(min = 0.0))]
    pub labor_cost: f64,
    pub mileage: u32,
    #[validate(length(min = 1, max = 120))]
    pub technician_name: String,
    pub photos: Option<Vec<String>>,
    pub next_service_date: Option<NaiveDate>,
    pub next_service_mileage: Option<u32>,
    pub status: Option<ServiceStatus>,
    pub notes: Option<String>,
}

/// Update service request; a provided `parts` list replaces the whole list
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    pub service_date: Option<NaiveDate>,
    pub service_types: Option<Vec<String>>,
    #[validate(length(min = 1, max = 2000))]
    pub description: Option<String>,
    #[validate(nested)]
    pub parts: Option<Vec<ServicePartInput>>,
    #[validate(range(min = 0.0))]
    pub labor_cost: Option<f64>,
    pub mileage: Option<u32>,
    #[validate(length(min = 1, max = 120))]
    pub technician_name: Option<String>,
    pub photos: Option<Vec<String>>,
    pub next_service_date: Option<NaiveDate>,
    pub next_service_mileage: Option<u32>,
    pub status: Option<ServiceStatus>,
    pub notes: Option<String>,
}

/// Service total: sum of part line totals plus labor
pub fn total_cost(parts: &[ServicePart], labor_cost: f64) -> f64 {
    parts.iter().map(|p| p.total_price).sum::<f64>() + labor_cost
}
