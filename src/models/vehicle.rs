//! Vehicle domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Car,
    Truck,
    Motorcycle,
    Suv,
    Van,
}

impl VehicleType {
    /// Spanish display label used by the dashboard
    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Car => "Automóvil",
            VehicleType::Truck => "Camioneta",
            VehicleType::Motorcycle => "Motocicleta",
            VehicleType::Suv => "SUV",
            VehicleType::Van => "Van/Furgoneta",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electric,
    Hybrid,
    Gas,
}

impl FuelType {
    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "Gasolina",
            FuelType::Diesel => "Diésel",
            FuelType::Electric => "Eléctrico",
            FuelType::Hybrid => "Híbrido",
            FuelType::Gas => "Gas Natural",
        }
    }
}

/// Vehicle owned by a client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: Uuid,
    /// Owning client (required)
    pub client_id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: u16,
    /// License plate
    pub license: String,
    pub color: String,
    pub vehicle_type: VehicleType,
    pub current_mileage: u32,
    pub fuel_type: FuelType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.brand, self.model, self.year)
    }

    pub fn name_with_license(&self) -> String {
        format!("{} {} {} - {}", self.brand, self.model, self.year, self.license)
    }
}

/// Create vehicle request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    pub client_id: Uuid,
    #[validate(length(min = 1, max = 60))]
    pub brand: String,
    #[validate(length(min = 1, max = 60))]
    pub model: String,
    #[validate(range(min = 1900, max = 2100))]
    pub year: u16,
    #[validate(length(min = 1, max = 20))]
    pub license: String,
    #[validate(length(min = 1, max = 40))]
    pub color: String,
    pub vehicle_type: VehicleType,
    pub current_mileage: u32,
    pub fuel_type: FuelType,
}

/// Update vehicle request (the owning client never changes here)
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 60))]
    pub brand: Option<String>,
    #[validate(length(min = 1, max = 60))]
    pub model: Option<String>,
    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<u16>,
    #[validate(length(min = 1, max = 20))]
    pub license: Option<String>,
    #[validate(length(min = 1, max = 40))]
    pub color: Option<String>,
    pub vehicle_type: Option<VehicleType>,
    pub current_mileage: Option<u32>,
    pub fuel_type: Option<FuelType>,
}
