//! User repository

use crate::domain::{CreateUserInput, UpdateUserInput, User};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, input: &CreateUserInput) -> Result<User>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn list(&self) -> Result<Vec<User>>;
    async fn update(&self, id: i64, input: &UpdateUserInput) -> Result<User>;
    async fn delete(&self, id: i64) -> Result<()>;
    async fn count(&self) -> Result<i64>;
}

/// In-memory user store. Identifiers are server-assigned, starting at 1, and
/// immutable once set.
pub struct InMemoryUserRepository {
    rows: RwLock<BTreeMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, input: &CreateUserInput) -> Result<User> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
            department_id: input.department_id,
        };

        self.rows.write().await.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn update(&self, id: i64, input: &UpdateUserInput) -> Result<User> {
        let mut rows = self.rows.write().await;
        let user = rows
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("User not found with id: {}", id)))?;

        user.first_name = input.first_name.clone();
        user.last_name = input.last_name.clone();
        user.email = input.email.clone();
        user.department_id = input.department_id;

        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        if self.rows.write().await.remove(&id).is_none() {
            return Err(AppError::NotFound(format!("User not found with id: {}", id)));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.rows.read().await.len() as i64)
    }
}
