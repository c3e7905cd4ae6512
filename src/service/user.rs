//! User service: CRUD plus the user-with-department aggregation

use crate::client::DepartmentClient;
use crate::domain::{CreateUserInput, UpdateUserInput, User, UserWithDepartment};
use crate::error::{AppError, Result};
use crate::repository::UserRepository;
use std::sync::Arc;
use tracing::info;

pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
    departments: DepartmentClient,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: Arc<R>, departments: DepartmentClient) -> Self {
        Self { repo, departments }
    }

    pub async fn create(&self, input: CreateUserInput) -> Result<User> {
        self.repo.create(&input).await
    }

    pub async fn get(&self, id: i64) -> Result<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User not found with id: {}", id)))
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.repo.list().await
    }

    pub async fn update(&self, id: i64, input: UpdateUserInput) -> Result<User> {
        self.repo.update(id, &input).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repo.delete(id).await
    }

    /// Aggregate read: the user enriched with its department.
    ///
    /// The only fatal condition is the user itself being absent. The
    /// department fetch is fail-open; an unreachable department service
    /// yields the sentinel, never an error.
    pub async fn get_with_department(&self, id: i64) -> Result<UserWithDepartment> {
        let user = self.get(id).await?;

        info!(
            user_id = user.id,
            department_id = user.department_id,
            "resolving department for aggregate read"
        );
        let department = self.departments.get_department(user.department_id).await;

        Ok(UserWithDepartment { user, department })
    }
}
