//! Typed client for the department service

use crate::client::RemoteClient;
use crate::config::DownstreamConfig;
use crate::domain::Department;

/// Client for the department service's resource-by-id endpoint, with the
/// unavailable-department sentinel as its fallback.
#[derive(Clone)]
pub struct DepartmentClient {
    remote: RemoteClient,
}

impl DepartmentClient {
    pub fn new(config: &DownstreamConfig) -> Self {
        Self {
            remote: RemoteClient::new("department-service", config),
        }
    }

    /// Fetch a department by id. Never fails: any downstream problem yields
    /// the sentinel placeholder that echoes the requested id.
    pub async fn get_department(&self, id: i64) -> Department {
        self.remote
            .get_with_fallback(&format!("/api/v1/departments/{}", id), || {
                Department::unavailable(id)
            })
            .await
    }
}
