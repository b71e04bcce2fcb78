//! Workshop management HTTP handlers

use crate::{
    auth::identity::Identity,
    error::AppError,
    middleware::AppState,
    models::workshop::{CreateWorkshopRequest, UpdateWorkshopRequest},
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

/// List workshops
pub async fn list_workshops(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let workshops = state.repos.workshops.list().await?;

    Ok(Json(json!({
        "workshops": workshops,
        "count": workshops.len(),
    })))
}

/// Create a workshop
pub async fn create_workshop(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    Json(req): Json<CreateWorkshopRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    if let Some(user_id) = req.user_id {
        if state.repos.customers.find_by_id(user_id).await?.is_none() {
            return Err(AppError::BadRequest("Unknown owner for workshop".to_string()));
        }
    }

    let workshop = state.repos.workshops.create(req).await?;

    tracing::info!(
        workshop_id = %workshop.id,
        created_by = %identity.user_id,
        "Workshop created"
    );

    Ok(Json(json!({
        "message": "Taller creado",
        "workshop": workshop,
    })))
}

/// Workshop detail
pub async fn get_workshop(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let workshop = state.repos.workshops.find_by_id(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(workshop))
}

/// Update a workshop
pub async fn update_workshop(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateWorkshopRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let workshop = state.repos.workshops.update(id, req).await?.ok_or(AppError::NotFound)?;

    Ok(Json(json!({
        "message": "Taller actualizado",
        "workshop": workshop,
    })))
}

/// Delete a workshop; refused while it still has service records
pub async fn delete_workshop(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let performed = state.repos.services.list_by_workshop(id).await?;
    if !performed.is_empty() {
        return Err(AppError::BadRequest(
            "The workshop still has service records".to_string(),
        ));
    }

    if !state.repos.workshops.delete(id).await? {
        return Err(AppError::NotFound);
    }

    tracing::info!(workshop_id = %id, deleted_by = %identity.user_id, "Workshop deleted");

    Ok(Json(json!({
        "message": "Taller eliminado",
    })))
}
