//! Domain models of the vehicle-service network
//! Clients own vehicles, vehicles receive services at workshops, workshops
//! belong to customer (manager) accounts

pub mod client;
pub mod customer;
pub mod service;
pub mod vehicle;
pub mod workshop;
