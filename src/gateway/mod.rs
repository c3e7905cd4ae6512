//! Edge gateway: single authenticated ingress, reverse proxy to the backends
//!
//! Every request is authenticated by the middleware chain before any backend
//! is reached, then forwarded to the service owning the path prefix.

use crate::api;
use crate::config::GatewayConfig;
use crate::jwt::TokenVerifier;
use crate::middleware::{authenticate, AuthGatewayState};
use anyhow::Result;
use axum::{
    body::Body,
    extract::State,
    http::{header::HeaderName, HeaderMap, HeaderValue, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Largest request body the proxy will buffer (2 MiB).
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Connection-scoped headers that must not be forwarded in either direction.
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// One backend behind the gateway, matched by path prefix.
#[derive(Debug, Clone)]
pub struct RouteTarget {
    pub prefix: String,
    pub base_url: String,
}

/// Shared proxy state
#[derive(Clone)]
pub struct GatewayState {
    routes: Arc<Vec<RouteTarget>>,
    http: reqwest::Client,
}

impl GatewayState {
    pub fn new(routes: Vec<RouteTarget>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            routes: Arc::new(routes),
            http,
        }
    }

    /// Longest matching prefix wins.
    fn resolve(&self, path: &str) -> Option<&RouteTarget> {
        self.routes
            .iter()
            .filter(|route| path.starts_with(route.prefix.as_str()))
            .max_by_key(|route| route.prefix.len())
    }
}

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !is_hop_by_hop(name) && name.as_str() != "host")
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Forward an authenticated request to the backend owning its path.
pub async fn proxy(State(state): State<GatewayState>, request: Request<Body>) -> Response {
    let path = request.uri().path().to_string();
    let Some(target) = state.resolve(&path) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"message": format!("No route for path: {}", path)})),
        )
            .into_response();
    };

    let query = request
        .uri()
        .query()
        .map(|q| format!("?{}", q))
        .unwrap_or_default();
    let url = format!(
        "{}{}{}",
        target.base_url.trim_end_matches('/'),
        path,
        query
    );

    let (parts, body) = request.into_parts();
    let body_bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(json!({"message": "Request body too large"})),
            )
                .into_response();
        }
    };

    let upstream = state
        .http
        .request(parts.method, &url)
        .headers(forwardable_headers(&parts.headers))
        .body(body_bytes)
        .send()
        .await;

    let upstream = match upstream {
        Ok(response) => response,
        Err(err) => {
            warn!("Proxy call to {} failed: {}", url, err);
            return (
                StatusCode::BAD_GATEWAY,
                Json(json!({"message": "Upstream service unavailable"})),
            )
                .into_response();
        }
    };

    let status = upstream.status();
    let headers = upstream.headers().clone();
    let bytes = upstream.bytes().await.unwrap_or_default();

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    for (name, value) in headers.iter() {
        if !is_hop_by_hop(name) && name.as_str() != "content-length" {
            response.headers_mut().insert(name.clone(), value.clone());
        }
    }
    response
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    // Permissive by default; deployments can narrow it through configuration.
    if allowed_origins.is_empty() || allowed_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring unparsable CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the gateway router: health endpoint, proxy fallback, authentication
/// in front of everything, CORS outermost so preflight never needs a
/// credential.
pub fn build_gateway_router(config: &GatewayConfig) -> Router {
    let auth_state = AuthGatewayState::new(
        TokenVerifier::new(config.jwt.clone()),
        config.public_paths.clone(),
    );
    let state = GatewayState::new(vec![
        RouteTarget {
            prefix: "/api/v1/users".to_string(),
            base_url: config.user_service_url.clone(),
        },
        RouteTarget {
            prefix: "/api/v1/departments".to_string(),
            base_url: config.department_service_url.clone(),
        },
    ]);

    Router::new()
        .route("/health", get(api::health::health))
        .fallback(proxy)
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            authenticate,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_allowed_origins))
        .with_state(state)
}

/// Run the gateway
pub async fn run(config: GatewayConfig) -> Result<()> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Gateway listening on {}", addr);
    axum::serve(listener, build_gateway_router(&config)).await?;
    Ok(())
}
