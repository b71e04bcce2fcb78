//! Admin backend for the vehicle-service network
//! Role-gated HTTP API over the in-memory prototyping store

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod nav;
pub mod rbac;
pub mod repository;
pub mod routes;
pub mod telemetry;
