//! Route guard integration tests
//!
//! Drives the real router and asserts the redirect behavior of the guard

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use std::sync::Arc;
use taller_admin::config::{
    AppConfig, DataConfig, LoggingConfig, SecurityConfig, ServerConfig,
};
use taller_admin::middleware::AppState;
use taller_admin::rbac::permissions::PermissionTable;
use taller_admin::repository::Repositories;
use taller_admin::routes::create_router;
use tower::ServiceExt;
use uuid::Uuid;

fn create_test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            addr: "127.0.0.1:0".to_string(),
            graceful_shutdown_timeout_secs: 5,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig {
            trust_proxy: false,
            allowed_ips: None,
            identity_user_header: "x-auth-user".to_string(),
            identity_email_header: "x-auth-email".to_string(),
            identity_roles_header: "x-auth-roles".to_string(),
        },
        data: DataConfig { seed_demo: false },
    }
}

fn create_test_app() -> Router {
    let state = Arc::new(AppState {
        config: create_test_config(),
        permissions: PermissionTable::with_defaults(),
        repos: Arc::new(Repositories::new()),
    });
    create_router(state)
}

fn request(path: &str, roles: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(path);
    if let Some(roles) = roles {
        builder = builder
            .header("x-auth-user", Uuid::new_v4().to_string())
            .header("x-auth-email", "user@taller.test")
            .header("x-auth-roles", roles);
    }
    builder.body(Body::empty()).unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

#[tokio::test]
async fn health_probe_is_public() {
    let app = create_test_app();
    let response = app.oneshot(request("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_identity_redirects_to_sign_in_with_return_location() {
    let app = create_test_app();
    let response = app.oneshot(request("/api/v1/workshops", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/sign-in-2?redirect=/api/v1/workshops");
}

#[tokio::test]
async fn manager_cannot_enter_admin_only_section() {
    let app = create_test_app();
    let response = app
        .oneshot(request("/api/v1/customers", Some("MANAGER")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/errors/unauthorized");
}

#[tokio::test]
async fn admin_enters_admin_only_section() {
    let app = create_test_app();
    let response = app
        .oneshot(request("/api/v1/customers", Some("ADMIN")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn extra_roles_do_not_revoke_access() {
    let app = create_test_app();
    let response = app
        .oneshot(request("/api/v1/customers", Some("ADMIN,MANAGER")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn manager_enters_shared_sections() {
    let app = create_test_app();

    for path in [
        "/api/v1/workshops",
        "/api/v1/all-clients",
        "/api/v1/all-vehicles",
        "/api/v1/all-services",
    ] {
        let response = app
            .clone()
            .oneshot(request(path, Some("MANAGER")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{path} should be open to managers");
    }
}

#[tokio::test]
async fn item_paths_inherit_the_section_permission() {
    let app = create_test_app();
    let id = Uuid::new_v4();

    // Manager is denied on the admin-only collection and its items alike
    let response = app
        .clone()
        .oneshot(request(&format!("/api/v1/customers/{id}"), Some("MANAGER")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/errors/unauthorized");

    // Admin passes the guard; the unknown id then yields a plain 404
    let response = app
        .oneshot(request(&format!("/api/v1/customers/{id}"), Some("ADMIN")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_roles_only_count_as_unauthenticated() {
    let app = create_test_app();
    let response = app
        .oneshot(request("/api/v1/workshops", Some("SUPERUSER")))
        .await
        .unwrap();

    // The one forwarded role is unknown, so the identity has no usable
    // roles and the guard sends the user back to sign-in
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/sign-in-2"));
}

#[tokio::test]
async fn client_role_is_denied_on_manager_sections() {
    let app = create_test_app();
    let response = app
        .oneshot(request("/api/v1/all-vehicles", Some("CLIENT")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/errors/unauthorized");
}

#[tokio::test]
async fn unmapped_api_section_fails_closed() {
    let app = create_test_app();
    let response = app
        .oneshot(request("/api/v1/reports", Some("ADMIN")))
        .await
        .unwrap();

    // No handler is mounted there, but the guard never runs for it either;
    // axum answers 404 and nothing is leaked
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
