//! User API handlers

use crate::domain::{CreateUserInput, UpdateUserInput};
use crate::error::Result;
use crate::server::UserAppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Create user
pub async fn create(
    State(state): State<UserAppState>,
    Json(input): Json<CreateUserInput>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// List users
pub async fn list(State(state): State<UserAppState>) -> Result<impl IntoResponse> {
    let users = state.user_service.list().await?;
    Ok(Json(users))
}

/// Get user by id
pub async fn get(
    State(state): State<UserAppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.get(id).await?;
    Ok(Json(user))
}

/// Update user
pub async fn update(
    State(state): State<UserAppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateUserInput>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.update(id, input).await?;
    Ok(Json(user))
}

/// Delete user
pub async fn delete(
    State(state): State<UserAppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.user_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Aggregate read: user with its department, degrading to the unavailable
/// sentinel when the department service cannot answer.
pub async fn get_with_department(
    State(state): State<UserAppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let composite = state.user_service.get_with_department(id).await?;
    Ok(Json(composite))
}
