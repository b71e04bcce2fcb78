//! Demo fixtures for the in-memory store
//! The same prototyping data set the dashboard was developed against

use crate::{
    error::AppError,
    models::{
        client::CreateClientRequest,
        customer::CreateCustomerRequest,
        service::{CreateServiceRequest, ServicePartInput, ServiceStatus},
        vehicle::{CreateVehicleRequest, FuelType, VehicleType},
        workshop::{Address, CreateWorkshopRequest},
    },
    repository::Repositories,
};
use chrono::NaiveDate;

/// Load the demo data set. Intended for local development and demos only.
pub async fn seed_demo_data(repos: &Repositories) -> Result<(), AppError> {
    let customer = repos
        .customers
        .create(CreateCustomerRequest {
            names: "Carlos".to_string(),
            last_name: "Gómez".to_string(),
            email: "carlos@talleres.test".to_string(),
            phone: Some("+54 11 6000-1000".to_string()),
            roles: vec!["MANAGER".to_string()],
        })
        .await?;

    let workshop = repos
        .workshops
        .create(CreateWorkshopRequest {
            name: "Taller Central".to_string(),
            cuit: Some("30-71234567-8".to_string()),
            status: Some(true),
            manager: customer.full_name(),
            email: "central@talleres.test".to_string(),
            phone: "+54 11 5555-0000".to_string(),
            address: Some(Address {
                street: Some("Av. Rivadavia 5500".to_string()),
                city: Some("Buenos Aires".to_string()),
                state: Some("CABA".to_string()),
                country: Some("Argentina".to_string()),
                zip_code: Some("C1424".to_string()),
            }),
            user_id: Some(customer.id),
        })
        .await?;

    let client = repos
        .clients
        .create(CreateClientRequest {
            first_name: "Juan".to_string(),
            last_name: "Pérez".to_string(),
            dni: "30123456".to_string(),
            phone: "+54 11 4444-5555".to_string(),
            email: "juan.perez@example.com".to_string(),
            address: "Av. Corrientes 1234".to_string(),
            notes: None,
        })
        .await?;

    let vehicle = repos
        .vehicles
        .create(CreateVehicleRequest {
            client_id: client.id,
            brand: "Toyota".to_string(),
            model: "Hilux".to_string(),
            year: 2021,
            license: "AB123CD".to_string(),
            color: "Blanco".to_string(),
            vehicle_type: VehicleType::Truck,
            current_mileage: 54_000,
            fuel_type: FuelType::Diesel,
        })
        .await?;

    repos
        .services
        .create(CreateServiceRequest {
            workshop_id: workshop.id,
            vehicle_id: vehicle.id,
            service_date: NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid fixture date"),
            service_types: vec!["oil_change".to_string(), "filters".to_string()],
            description: "Cambio de aceite y filtros".to_string(),
            parts: vec![
                ServicePartInput {
                    part_name: "Filtro de aceite".to_string(),
                    part_code: Some("FO-123".to_string()),
                    quantity: 1,
                    unit_price: 1500.0,
                },
                ServicePartInput {
                    part_name: "Aceite 10W40".to_string(),
                    part_code: None,
                    quantity: 4,
                    unit_price: 2200.0,
                },
            ],
            labor_cost: 5000.0,
            mileage: 54_000,
            technician_name: "Pedro Ramírez".to_string(),
            photos: None,
            next_service_date: None,
            next_service_mileage: Some(64_000),
            status: Some(ServiceStatus::Completed),
            notes: None,
        })
        .await?;

    tracing::info!("Demo data loaded into the in-memory store");
    Ok(())
}
