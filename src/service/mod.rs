//! Business logic, generic over the repository contracts

pub mod department;
pub mod user;

pub use department::DepartmentService;
pub use user::UserService;
