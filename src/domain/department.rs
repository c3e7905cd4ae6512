//! Department domain types

use serde::{Deserialize, Serialize};

/// Marker used by the unavailable-department sentinel.
pub const UNAVAILABLE: &str = "N/A";

/// A department record owned by the department service. The user service
/// treats this as an opaque remote value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub code: String,
}

impl Department {
    /// Sentinel placeholder returned whenever the department service cannot be
    /// reached: the requested identifier is echoed back, name and code carry
    /// the fixed unavailable marker.
    pub fn unavailable(id: i64) -> Self {
        Self {
            id,
            name: UNAVAILABLE.to_string(),
            code: UNAVAILABLE.to_string(),
        }
    }

    /// Whether this value is the unavailable sentinel rather than genuine data.
    pub fn is_unavailable(&self) -> bool {
        self.name == UNAVAILABLE && self.code == UNAVAILABLE
    }
}

/// Input for creating a department; the identifier is server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDepartmentInput {
    pub name: String,
    pub code: String,
}

/// Input for updating a department. Full replacement, idempotent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDepartmentInput {
    pub name: String,
    pub code: String,
}
