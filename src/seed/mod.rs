//! Startup seed data for local and demo deployments
//!
//! Seeding only runs against an empty store, so restarting a service never
//! duplicates rows.

use crate::domain::department::CreateDepartmentInput;
use crate::domain::user::CreateUserInput;
use crate::repository::{DepartmentRepository, UserRepository};
use crate::Result;
use tracing::info;

/// Seed the department store with the demo org chart. No-op when rows exist.
pub async fn seed_departments<R: DepartmentRepository>(repo: &R) -> Result<()> {
    if repo.count().await? > 0 {
        info!("Department store already populated, skipping seed");
        return Ok(());
    }

    let departments = [
        CreateDepartmentInput {
            name: "Information Technology".to_string(),
            code: "IT".to_string(),
        },
        CreateDepartmentInput {
            name: "Human Resources".to_string(),
            code: "HR".to_string(),
        },
        CreateDepartmentInput {
            name: "Finance".to_string(),
            code: "FIN".to_string(),
        },
    ];

    for input in &departments {
        let department = repo.create(input).await?;
        info!(
            "Seeded department {} ({})",
            department.name, department.code
        );
    }

    Ok(())
}

/// Seed the user store with demo staff. No-op when rows exist.
pub async fn seed_users<R: UserRepository>(repo: &R) -> Result<()> {
    if repo.count().await? > 0 {
        info!("User store already populated, skipping seed");
        return Ok(());
    }

    let users = [
        CreateUserInput {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            department_id: 1,
        },
        CreateUserInput {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            department_id: 2,
        },
        CreateUserInput {
            first_name: "Alice".to_string(),
            last_name: "Johnson".to_string(),
            email: "alice.johnson@example.com".to_string(),
            department_id: 1,
        },
    ];

    for input in &users {
        let user = repo.create(input).await?;
        info!("Seeded user {} {}", user.first_name, user.last_name);
    }

    Ok(())
}
