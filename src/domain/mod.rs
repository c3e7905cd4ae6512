//! Domain models for staffgrid

pub mod department;
pub mod user;

pub use department::*;
pub use user::*;
