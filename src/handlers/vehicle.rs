//! Vehicle management HTTP handlers

use crate::{
    auth::identity::Identity,
    error::AppError,
    middleware::AppState,
    models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest},
};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// List vehicles
pub async fn list_vehicles(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let vehicles = state.repos.vehicles.list().await?;

    Ok(Json(json!({
        "vehicles": vehicles,
        "count": vehicles.len(),
    })))
}

/// Create a vehicle; the owning client must exist
pub async fn create_vehicle(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    Json(req): Json<CreateVehicleRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    if !state.repos.clients.exists(req.client_id).await? {
        return Err(AppError::BadRequest("Unknown client for vehicle".to_string()));
    }

    let vehicle = state.repos.vehicles.create(req).await?;

    tracing::info!(
        vehicle_id = %vehicle.id,
        created_by = %identity.user_id,
        "Vehicle created"
    );

    Ok(Json(json!({
        "message": "Vehículo creado",
        "vehicle": vehicle,
    })))
}

/// Vehicle detail
pub async fn get_vehicle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let vehicle = state.repos.vehicles.find_by_id(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(vehicle))
}

/// Update a vehicle
pub async fn update_vehicle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateVehicleRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let vehicle = state.repos.vehicles.update(id, req).await?.ok_or(AppError::NotFound)?;

    Ok(Json(json!({
        "message": "Vehículo actualizado",
        "vehicle": vehicle,
    })))
}

/// Delete a vehicle; refused while service history exists
pub async fn delete_vehicle(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let history = state.repos.services.list_by_vehicle(id).await?;
    if !history.is_empty() {
        return Err(AppError::BadRequest(
            "The vehicle still has service records".to_string(),
        ));
    }

    if !state.repos.vehicles.delete(id).await? {
        return Err(AppError::NotFound);
    }

    tracing::info!(vehicle_id = %id, deleted_by = %identity.user_id, "Vehicle deleted");

    Ok(Json(json!({
        "message": "Vehículo eliminado",
    })))
}

/// Service history of one vehicle
pub async fn get_vehicle_services(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !state.repos.vehicles.exists(id).await? {
        return Err(AppError::NotFound);
    }

    let services = state.repos.services.list_by_vehicle(id).await?;

    Ok(Json(json!({
        "services": services,
        "count": services.len(),
    })))
}
