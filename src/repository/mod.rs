//! Data access layer
//! In-memory mock stores standing in for the remote data API during
//! prototyping; handlers only see the repository interfaces

pub mod client_repo;
pub mod customer_repo;
pub mod seed;
pub mod service_repo;
pub mod vehicle_repo;
pub mod workshop_repo;

pub use client_repo::ClientRepository;
pub use customer_repo::CustomerRepository;
pub use seed::seed_demo_data;
pub use service_repo::ServiceRepository;
pub use vehicle_repo::VehicleRepository;
pub use workshop_repo::WorkshopRepository;

/// All entity stores bundled for the application state
#[derive(Default)]
pub struct Repositories {
    pub clients: ClientRepository,
    pub customers: CustomerRepository,
    pub services: ServiceRepository,
    pub vehicles: VehicleRepository,
    pub workshops: WorkshopRepository,
}

impl Repositories {
    pub fn new() -> Self {
        Self::default()
    }
}
