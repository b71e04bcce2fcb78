//! Route registration
//! Builds the API router and applies the middleware stack

use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::{handlers, middleware::AppState};

/// Request bodies above this are rejected before deserialization
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Build the application router.
///
/// Layer order per request: request tracking -> IP allow-list -> identity
/// ingestion -> route guard -> handler. The guard only wraps the routes
/// backed by the permission table; the probes stay public and the session
/// endpoints require an identity but no table entry.
pub fn create_router(state: Arc<AppState>) -> Router {
    // Public probes
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check));

    // Identity required, not permission-gated: any authenticated role may
    // ask who it is and what navigation it can see
    let session_routes = Router::new()
        .route("/api/v1/auth/me", get(handlers::session::get_current_user))
        .route("/api/v1/nav", get(handlers::nav::get_navigation));

    // Permission-gated sections; paths under /api/v1 map onto the route
    // keys of the permission table
    let guarded_routes = Router::new()
        // Proveedores (admin only per the table)
        .route(
            "/api/v1/customers",
            get(handlers::customer::list_customers).post(handlers::customer::create_customer),
        )
        .route(
            "/api/v1/customers/{id}",
            get(handlers::customer::get_customer)
                .put(handlers::customer::update_customer)
                .delete(handlers::customer::delete_customer),
        )
        // Talleres
        .route(
            "/api/v1/workshops",
            get(handlers::workshop::list_workshops).post(handlers::workshop::create_workshop),
        )
        .route(
            "/api/v1/workshops/{id}",
            get(handlers::workshop::get_workshop)
                .put(handlers::workshop::update_workshop)
                .delete(handlers::workshop::delete_workshop),
        )
        // Clientes
        .route(
            "/api/v1/all-clients",
            get(handlers::client::list_clients).post(handlers::client::create_client),
        )
        .route(
            "/api/v1/all-clients/{id}",
            get(handlers::client::get_client)
                .put(handlers::client::update_client)
                .delete(handlers::client::delete_client),
        )
        // Vehículos
        .route(
            "/api/v1/all-vehicles",
            get(handlers::vehicle::list_vehicles).post(handlers::vehicle::create_vehicle),
        )
        .route(
            "/api/v1/all-vehicles/{id}",
            get(handlers::vehicle::get_vehicle)
                .put(handlers::vehicle::update_vehicle)
                .delete(handlers::vehicle::delete_vehicle),
        )
        .route(
            "/api/v1/all-vehicles/{id}/services",
            get(handlers::vehicle::get_vehicle_services),
        )
        // Servicios
        .route(
            "/api/v1/all-services",
            get(handlers::service::list_services).post(handlers::service::create_service),
        )
        .route(
            "/api/v1/all-services/{id}",
            get(handlers::service::get_service)
                .put(handlers::service::update_service)
                .delete(handlers::service::delete_service),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::rbac::guard::route_guard_middleware,
        ));

    let authenticated_routes = session_routes.merge(guarded_routes).layer(
        axum::middleware::from_fn_with_state(
            state.clone(),
            crate::auth::middleware::identity_ingest_middleware,
        ),
    );

    Router::new()
        .merge(public_routes)
        .merge(authenticated_routes)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::ip_whitelist_middleware,
        ))
        .layer(axum::middleware::from_fn(crate::middleware::request_tracking_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        // The gateway terminates the browser origin; anything it forwards is fine
        .layer(CorsLayer::permissive())
        .with_state(state)
}
