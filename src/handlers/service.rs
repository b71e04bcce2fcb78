//! Maintenance service HTTP handlers

use crate::{
    auth::identity::Identity,
    error::AppError,
    middleware::AppState,
    models::service::{CreateServiceRequest, UpdateServiceRequest},
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

/// List services
pub async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let services = state.repos.services.list().await?;

    Ok(Json(json!({
        "services": services,
        "count": services.len(),
    })))
}

/// Create a service record; vehicle and workshop must both exist
pub async fn create_service(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    Json(req): Json<CreateServiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    if !state.repos.vehicles.exists(req.vehicle_id).await? {
        return Err(AppError::BadRequest("Unknown vehicle for service".to_string()));
    }
    if !state.repos.workshops.exists(req.workshop_id).await? {
        return Err(AppError::BadRequest("Unknown workshop for service".to_string()));
    }

    let service = state.repos.services.create(req).await?;

    tracing::info!(
        service_id = %service.id,
        total_cost = service.total_cost,
        created_by = %identity.user_id,
        "Service created"
    );

    Ok(Json(json!({
        "message": "Servicio creado",
        "service": service,
    })))
}

/// Service detail
pub async fn get_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = state.repos.services.find_by_id(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(service))
}

/// Update a service record
pub async fn update_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateServiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let service = state.repos.services.update(id, req).await?.ok_or(AppError::NotFound)?;

    Ok(Json(json!({
        "message": "Servicio actualizado",
        "service": service,
    })))
}

/// Delete a service record
pub async fn delete_service(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !state.repos.services.delete(id).await? {
        return Err(AppError::NotFound);
    }

    tracing::info!(service_id = %id, deleted_by = %identity.user_id, "Service deleted");

    Ok(Json(json!({
        "message": "Servicio eliminado",
    })))
}
