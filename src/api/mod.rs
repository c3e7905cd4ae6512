//! REST API handlers

pub mod department;
pub mod health;
pub mod user;
