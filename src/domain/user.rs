//! User domain types

use crate::domain::Department;
use serde::{Deserialize, Serialize};

/// A user record owned by the user service.
///
/// `department_id` is a foreign identifier into the department service; it may
/// point at a department that does not exist or is unreachable, which never
/// invalidates the user itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: i64,
}

/// Input for creating a user; the identifier is server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: i64,
}

/// Input for updating a user. All fields are replaced, so repeating the same
/// update leaves the record unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: i64,
}

/// A user enriched with its department (or the unavailable sentinel).
/// Built per-request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithDepartment {
    pub user: User,
    pub department: Department,
}
