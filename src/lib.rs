//! Staffgrid - staff directory microservices
//!
//! One library crate backing three binaries: the edge gateway (authentication
//! and reverse proxying), the user service (user CRUD plus the
//! user-with-department aggregate read), and the department service
//! (department CRUD).

pub mod api;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod jwt;
pub mod middleware;
pub mod repository;
pub mod seed;
pub mod server;
pub mod service;

// Re-export commonly used types
pub use error::{AppError, Result};
