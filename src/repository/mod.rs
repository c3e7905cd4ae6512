//! Persistence contracts for the owned entity types
//!
//! The services depend only on these traits; the in-memory implementations
//! back the binaries and tests. Anything beyond the create/read/update/delete
//! contract is a storage concern that lives outside this crate.

pub mod department;
pub mod user;

pub use department::{DepartmentRepository, InMemoryDepartmentRepository};
pub use user::{InMemoryUserRepository, UserRepository};
