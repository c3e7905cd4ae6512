//! Department repository

use crate::domain::{CreateDepartmentInput, Department, UpdateDepartmentInput};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn create(&self, input: &CreateDepartmentInput) -> Result<Department>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Department>>;
    async fn list(&self) -> Result<Vec<Department>>;
    async fn update(&self, id: i64, input: &UpdateDepartmentInput) -> Result<Department>;
    async fn delete(&self, id: i64) -> Result<()>;
    async fn count(&self) -> Result<i64>;
}

/// In-memory department store with server-assigned identifiers.
pub struct InMemoryDepartmentRepository {
    rows: RwLock<BTreeMap<i64, Department>>,
    next_id: AtomicI64,
}

impl InMemoryDepartmentRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryDepartmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartmentRepository {
    async fn create(&self, input: &CreateDepartmentInput) -> Result<Department> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let department = Department {
            id,
            name: input.name.clone(),
            code: input.code.clone(),
        };

        self.rows.write().await.insert(id, department.clone());
        Ok(department)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Department>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Department>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn update(&self, id: i64, input: &UpdateDepartmentInput) -> Result<Department> {
        let mut rows = self.rows.write().await;
        let department = rows
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Department not found with id: {}", id)))?;

        department.name = input.name.clone();
        department.code = input.code.clone();

        Ok(department.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        if self.rows.write().await.remove(&id).is_none() {
            return Err(AppError::NotFound(format!(
                "Department not found with id: {}",
                id
            )));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.rows.read().await.len() as i64)
    }
}
