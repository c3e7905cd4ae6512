//! Shared helpers for the integration tests

#![allow(dead_code)]

use axum::{body::Body, response::Response, Router};
use staffgrid::client::DepartmentClient;
use staffgrid::config::{DownstreamConfig, GatewayConfig, JwtConfig};
use staffgrid::jwt::TokenVerifier;
use staffgrid::repository::{InMemoryDepartmentRepository, InMemoryUserRepository};
use staffgrid::seed;
use staffgrid::server::{
    build_department_router, build_user_router, DepartmentAppState, UserAppState,
};
use staffgrid::service::{DepartmentService, UserService};
use std::sync::Arc;

pub const TEST_SECRET: &str = "integration-test-secret-key-with-length";
pub const TEST_ISSUER: &str = "https://staffgrid.test";

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        issuer: TEST_ISSUER.to_string(),
        access_token_ttl_secs: 3600,
        private_key_pem: None,
        public_key_pem: None,
    }
}

pub fn mint_token(subject: &str) -> String {
    TokenVerifier::new(jwt_config())
        .create_access_token(subject, None, vec!["staff".to_string()])
        .unwrap()
}

pub fn gateway_config(user_service_url: &str, department_service_url: &str) -> GatewayConfig {
    GatewayConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt: jwt_config(),
        public_paths: vec!["/health".to_string()],
        user_service_url: user_service_url.to_string(),
        department_service_url: department_service_url.to_string(),
        cors_allowed_origins: vec![],
    }
}

pub fn downstream_config(base_url: &str) -> DownstreamConfig {
    DownstreamConfig {
        base_url: base_url.to_string(),
        timeout_ms: 500,
        max_concurrent_calls: 4,
    }
}

/// A user-service router backed by the seeded in-memory store and a
/// department client pointed at `department_url`.
pub async fn seeded_user_router(department_url: &str) -> Router {
    seeded_user_router_with(downstream_config(department_url)).await
}

pub async fn seeded_user_router_with(department: DownstreamConfig) -> Router {
    let repo = Arc::new(InMemoryUserRepository::new());
    seed::seed_users(repo.as_ref()).await.unwrap();

    let state = UserAppState {
        user_service: Arc::new(UserService::new(repo, DepartmentClient::new(&department))),
    };
    build_user_router(state)
}

/// A department-service router backed by the seeded in-memory store.
pub async fn seeded_department_router() -> Router {
    let repo = Arc::new(InMemoryDepartmentRepository::new());
    seed::seed_departments(repo.as_ref()).await.unwrap();

    let state = DepartmentAppState {
        department_service: Arc::new(DepartmentService::new(repo)),
    };
    build_department_router(state)
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn json_request(
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
