//! Department API handlers

use crate::domain::{CreateDepartmentInput, UpdateDepartmentInput};
use crate::error::Result;
use crate::server::DepartmentAppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Create department
pub async fn create(
    State(state): State<DepartmentAppState>,
    Json(input): Json<CreateDepartmentInput>,
) -> Result<impl IntoResponse> {
    let department = state.department_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(department)))
}

/// List departments
pub async fn list(State(state): State<DepartmentAppState>) -> Result<impl IntoResponse> {
    let departments = state.department_service.list().await?;
    Ok(Json(departments))
}

/// Get department by id
pub async fn get(
    State(state): State<DepartmentAppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let department = state.department_service.get(id).await?;
    Ok(Json(department))
}

/// Update department
pub async fn update(
    State(state): State<DepartmentAppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateDepartmentInput>,
) -> Result<impl IntoResponse> {
    let department = state.department_service.update(id, input).await?;
    Ok(Json(department))
}

/// Delete department
pub async fn delete(
    State(state): State<DepartmentAppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.department_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
