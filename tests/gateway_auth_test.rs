//! Gateway integration tests: authentication at the edge, proxying behind it

mod common;

use axum::{body::Body, http::Request, http::StatusCode};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use staffgrid::gateway::build_gateway_router;

#[tokio::test]
async fn test_request_without_credential_is_rejected_and_never_proxied() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&backend)
        .await;

    let app = build_gateway_router(&common::gateway_config(&backend.uri(), &backend.uri()));
    let response = app
        .oneshot(common::empty_request("GET", "/api/v1/users/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = common::body_json(response).await;
    assert_eq!(body["message"], "Unauthorized: missing bearer credential");
}

#[tokio::test]
async fn test_health_is_public() {
    let app = build_gateway_router(&common::gateway_config(
        "http://localhost:1",
        "http://localhost:1",
    ));

    let response = app
        .oneshot(common::empty_request("GET", "/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_valid_credential_is_proxied_to_user_backend() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1,
            "firstName": "John",
            "lastName": "Doe",
            "email": "john.doe@example.com",
            "departmentId": 1
        })))
        .expect(1)
        .mount(&backend)
        .await;

    let app = build_gateway_router(&common::gateway_config(&backend.uri(), &backend.uri()));
    let token = common::mint_token("alice");
    let request = Request::builder()
        .uri("/api/v1/users/1")
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["firstName"], "John");
}

#[tokio::test]
async fn test_backend_status_passes_through_unchanged() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": "not_found",
            "message": "User not found with id: 99"
        })))
        .mount(&backend)
        .await;

    let app = build_gateway_router(&common::gateway_config(&backend.uri(), &backend.uri()));
    let token = common::mint_token("alice");
    let request = Request::builder()
        .uri("/api/v1/users/99")
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_expired_credential_reports_cause() {
    let expired = staffgrid::jwt::TokenVerifier::new(staffgrid::config::JwtConfig {
        access_token_ttl_secs: -600,
        ..common::jwt_config()
    })
    .create_access_token("alice", None, vec![])
    .unwrap();

    let app = build_gateway_router(&common::gateway_config(
        "http://localhost:1",
        "http://localhost:1",
    ));
    let request = Request::builder()
        .uri("/api/v1/users/1")
        .header("Authorization", format!("Bearer {}", expired))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = common::body_json(response).await;
    assert_eq!(body["message"], "Unauthorized: credential expired");
}

#[tokio::test]
async fn test_unrouted_path_returns_not_found() {
    let app = build_gateway_router(&common::gateway_config(
        "http://localhost:1",
        "http://localhost:1",
    ));
    let token = common::mint_token("alice");
    let request = Request::builder()
        .uri("/api/v2/unknown")
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unreachable_backend_maps_to_bad_gateway() {
    // Port 1 is never listening locally.
    let app = build_gateway_router(&common::gateway_config(
        "http://127.0.0.1:1",
        "http://127.0.0.1:1",
    ));
    let token = common::mint_token("alice");
    let request = Request::builder()
        .uri("/api/v1/users/1")
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_preflight_needs_no_credential() {
    let app = build_gateway_router(&common::gateway_config(
        "http://localhost:1",
        "http://localhost:1",
    ));
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/v1/users")
        .header("Origin", "https://app.example.com")
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_some());
}

#[tokio::test]
async fn test_department_prefix_routes_to_department_backend() {
    let users = MockServer::start().await;
    let departments = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/departments/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 2,
            "name": "Human Resources",
            "code": "HR"
        })))
        .expect(1)
        .mount(&departments)
        .await;

    let app = build_gateway_router(&common::gateway_config(&users.uri(), &departments.uri()));
    let token = common::mint_token("alice");
    let request = Request::builder()
        .uri("/api/v1/departments/2")
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(users.received_requests().await.unwrap().is_empty());
}
