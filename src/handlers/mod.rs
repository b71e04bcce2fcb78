//! HTTP handler modules

pub mod client;
pub mod customer;
pub mod health;
pub mod nav;
pub mod service;
pub mod session;
pub mod vehicle;
pub mod workshop;
