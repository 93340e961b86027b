//! Employee API Handlers
//!
//! Each handler performs exactly one store operation and translates the
//! outcome to a response. Validation failures surface as 400 and a
//! missing id on read or update as 404; deleting an id that is already
//! gone still counts as success, so deletes stay idempotent for callers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::repository::EmployeeRepository;
use crate::utils::{AppError, AppResult};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::response::MessageResponse;

/// List all employees, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employees = repo.find_all().await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Update an employee (sparse field set)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    if payload.is_empty() {
        return Err(AppError::validation("No fields supplied for update"));
    }

    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo.update(&id, payload).await?;
    Ok(Json(employee))
}

/// Delete an employee by id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let removed = repo.delete(&id).await?;

    if !removed {
        tracing::debug!(id = %id, "Delete requested for absent employee");
    }

    Ok(Json(MessageResponse::new("Employee deleted successfully")))
}
