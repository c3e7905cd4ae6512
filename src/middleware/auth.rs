//! Ingress authentication middleware
//!
//! Every request passes here before any handler or proxy target. Paths on the
//! configured public allowlist are forwarded as-is; everything else must carry
//! a verifiable bearer credential. Rejections short-circuit the chain with the
//! fixed body `{"message": "Unauthorized: <cause>"}`.

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use jsonwebtoken::errors::ErrorKind;
use serde_json::json;
use std::sync::Arc;

use crate::jwt::{AccessClaims, TokenVerifier};

/// Authenticated identity derived from a verified credential. Lives in the
/// request extensions for the remainder of handling; never persisted.
#[derive(Debug, Clone)]
pub struct Principal {
    pub subject: String,
    pub name: Option<String>,
    pub roles: Vec<String>,
    pub expires_at: i64,
}

impl From<AccessClaims> for Principal {
    fn from(claims: AccessClaims) -> Self {
        Self {
            subject: claims.sub,
            name: claims.name,
            roles: claims.roles,
            expires_at: claims.exp,
        }
    }
}

impl Principal {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Extractor for handlers that need the authenticated identity. Fails with
/// the gateway rejection shape if the middleware did not attach one.
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .ok_or(AuthError::MissingCredential)
    }
}

/// Authentication failures; both terminate the request at the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No bearer credential in the authorization header
    MissingCredential,
    /// Signature, expiry, issuer or structural failure
    InvalidCredential(String),
}

impl AuthError {
    fn cause(&self) -> String {
        match self {
            AuthError::MissingCredential => "missing bearer credential".to_string(),
            AuthError::InvalidCredential(detail) => detail.clone(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "message": format!("Unauthorized: {}", self.cause()),
            })),
        )
            .into_response()
    }
}

/// Shared state for the authentication middleware
#[derive(Clone)]
pub struct AuthGatewayState {
    verifier: TokenVerifier,
    public_paths: Arc<Vec<String>>,
}

impl AuthGatewayState {
    pub fn new(verifier: TokenVerifier, public_paths: Vec<String>) -> Self {
        Self {
            verifier,
            public_paths: Arc::new(public_paths),
        }
    }

    fn is_public(&self, path: &str) -> bool {
        self.public_paths
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}

/// Authentication enforcement middleware
///
/// Public paths bypass authentication entirely. For all other paths the
/// bearer credential is extracted and verified; on success a [`Principal`]
/// is attached to the request and it is forwarded unchanged, otherwise the
/// chain is short-circuited with a 401.
pub async fn authenticate(
    State(state): State<AuthGatewayState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if state.is_public(request.uri().path()) {
        return next.run(request).await;
    }

    let token = match extract_bearer_token(request.headers()) {
        Ok(token) => token,
        Err(err) => return err.into_response(),
    };

    match state.verifier.verify(token) {
        Ok(claims) => {
            request.extensions_mut().insert(Principal::from(claims));
            next.run(request).await
        }
        Err(err) => {
            let detail = match err.kind() {
                ErrorKind::ExpiredSignature => "credential expired".to_string(),
                ErrorKind::InvalidIssuer => "untrusted issuer".to_string(),
                ErrorKind::InvalidSignature => "invalid signature".to_string(),
                other => format!("invalid credential ({:?})", other),
            };
            AuthError::InvalidCredential(detail).into_response()
        }
    }
}

/// Extract the bearer token from the authorization header.
fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingCredential)?
        .to_str()
        .map_err(|_| AuthError::MissingCredential)?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingCredential)
}
