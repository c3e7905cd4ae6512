//! Department service: plain CRUD over the repository contract

use crate::domain::{CreateDepartmentInput, Department, UpdateDepartmentInput};
use crate::error::{AppError, Result};
use crate::repository::DepartmentRepository;
use std::sync::Arc;

pub struct DepartmentService<R: DepartmentRepository> {
    repo: Arc<R>,
}

impl<R: DepartmentRepository> DepartmentService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: CreateDepartmentInput) -> Result<Department> {
        self.repo.create(&input).await
    }

    pub async fn get(&self, id: i64) -> Result<Department> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Department not found with id: {}", id)))
    }

    pub async fn list(&self) -> Result<Vec<Department>> {
        self.repo.list().await
    }

    pub async fn update(&self, id: i64, input: UpdateDepartmentInput) -> Result<Department> {
        self.repo.update(id, &input).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repo.delete(id).await
    }
}
