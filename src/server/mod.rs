//! Server initialization and routing for the two backend services

use crate::api;
use crate::client::DepartmentClient;
use crate::config::{DepartmentServiceConfig, UserServiceConfig};
use crate::repository::{InMemoryDepartmentRepository, InMemoryUserRepository};
use crate::seed;
use crate::service::{DepartmentService, UserService};
use anyhow::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// State shared across user-service handlers
#[derive(Clone)]
pub struct UserAppState {
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
}

/// State shared across department-service handlers
#[derive(Clone)]
pub struct DepartmentAppState {
    pub department_service: Arc<DepartmentService<InMemoryDepartmentRepository>>,
}

/// Build the user-service router
pub fn build_user_router(state: UserAppState) -> Router {
    Router::new()
        .route("/health", get(api::health::health))
        .route(
            "/api/v1/users",
            get(api::user::list).post(api::user::create),
        )
        .route(
            "/api/v1/users/{id}",
            get(api::user::get)
                .put(api::user::update)
                .delete(api::user::delete),
        )
        .route(
            "/api/v1/users/{id}/with-department",
            get(api::user::get_with_department),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the department-service router
pub fn build_department_router(state: DepartmentAppState) -> Router {
    Router::new()
        .route("/health", get(api::health::health))
        .route(
            "/api/v1/departments",
            get(api::department::list).post(api::department::create),
        )
        .route(
            "/api/v1/departments/{id}",
            get(api::department::get)
                .put(api::department::update)
                .delete(api::department::delete),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the user service
pub async fn run_user_service(config: UserServiceConfig) -> Result<()> {
    let repo = Arc::new(InMemoryUserRepository::new());
    if config.seed_data {
        seed::seed_users(repo.as_ref()).await?;
    }

    let departments = DepartmentClient::new(&config.department);
    let state = UserAppState {
        user_service: Arc::new(UserService::new(repo, departments)),
    };

    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("User service listening on {}", addr);
    axum::serve(listener, build_user_router(state)).await?;
    Ok(())
}

/// Run the department service
pub async fn run_department_service(config: DepartmentServiceConfig) -> Result<()> {
    let repo = Arc::new(InMemoryDepartmentRepository::new());
    if config.seed_data {
        seed::seed_departments(repo.as_ref()).await?;
    }

    let state = DepartmentAppState {
        department_service: Arc::new(DepartmentService::new(repo)),
    };

    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Department service listening on {}", addr);
    axum::serve(listener, build_department_router(state)).await?;
    Ok(())
}
