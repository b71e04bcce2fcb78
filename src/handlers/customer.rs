//! Customer (proveedor) management HTTP handlers

use crate::{
    auth::identity::Identity,
    error::AppError,
    middleware::AppState,
    models::customer::{CreateCustomerRequest, UpdateCustomerRequest},
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

/// List customers
pub async fn list_customers(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let customers = state.repos.customers.list().await?;

    Ok(Json(json!({
        "customers": customers,
        "count": customers.len(),
    })))
}

/// Create a customer account
pub async fn create_customer(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    Json(req): Json<CreateCustomerRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let customer = state.repos.customers.create(req).await?;

    tracing::info!(
        customer_id = %customer.id,
        created_by = %identity.user_id,
        "Customer created"
    );

    Ok(Json(json!({
        "message": "Proveedor creado",
        "customer": customer,
    })))
}

/// Customer detail
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let customer = state.repos.customers.find_by_id(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(customer))
}

/// Update a customer account
pub async fn update_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCustomerRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let customer = state.repos.customers.update(id, req).await?.ok_or(AppError::NotFound)?;

    Ok(Json(json!({
        "message": "Proveedor actualizado",
        "customer": customer,
    })))
}

/// Delete a customer account
pub async fn delete_customer(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if id == identity.user_id {
        return Err(AppError::BadRequest("Cannot delete your own account".to_string()));
    }

    if !state.repos.customers.delete(id).await? {
        return Err(AppError::NotFound);
    }

    tracing::info!(customer_id = %id, deleted_by = %identity.user_id, "Customer deleted");

    Ok(Json(json!({
        "message": "Proveedor eliminado",
    })))
}
