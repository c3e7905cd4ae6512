//! HTTP middleware for the staffgrid gateway
//!
//! - JWT authentication enforcement with a public-path allowlist
//! - `Principal` extractor for handlers behind the gateway

pub mod auth;

pub use auth::{authenticate, AuthError, AuthGatewayState, Principal};
