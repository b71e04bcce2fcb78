//! Client management HTTP handlers

use crate::{
    auth::identity::Identity,
    error::AppError,
    middleware::AppState,
    models::client::{CreateClientRequest, UpdateClientRequest},
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

/// List clients
pub async fn list_clients(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let clients = state.repos.clients.list().await?;

    Ok(Json(json!({
        "clients": clients,
        "count": clients.len(),
    })))
}

/// Create a client
pub async fn create_client(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    Json(req): Json<CreateClientRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let client = state.repos.clients.create(req).await?;

    tracing::info!(
        client_id = %client.id,
        created_by = %identity.user_id,
        "Client created"
    );

    Ok(Json(json!({
        "message": "Cliente creado",
        "client": client,
    })))
}

/// Client detail
pub async fn get_client(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let client = state.repos.clients.find_by_id(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(client))
}

/// Update a client
pub async fn update_client(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateClientRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let client = state.repos.clients.update(id, req).await?.ok_or(AppError::NotFound)?;

    Ok(Json(json!({
        "message": "Cliente actualizado",
        "client": client,
    })))
}

/// Delete a client; refused while the client still owns vehicles
pub async fn delete_client(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let owned = state.repos.vehicles.list_by_client(id).await?;
    if !owned.is_empty() {
        return Err(AppError::BadRequest(
            "The client still has registered vehicles".to_string(),
        ));
    }

    if !state.repos.clients.delete(id).await? {
        return Err(AppError::NotFound);
    }

    tracing::info!(client_id = %id, deleted_by = %identity.user_id, "Client deleted");

    Ok(Json(json!({
        "message": "Cliente eliminado",
    })))
}
