//! Employee CRUD handlers
//!
//! The mutating endpoints sit behind `ValidatedJson`, so by the time a
//! payload reaches a handler it has already passed the schema rules.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::extract::ValidatedJson;
use crate::models::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};
use crate::store::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, empty_success, success};

pub async fn list_employees(State(state): State<AppState>) -> Response {
    let employees = state.store.list().await;
    success(employees, "Employees retrieved successfully").into_response()
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let employee = state
        .store
        .get(id)
        .await
        .ok_or_else(|| not_found(id))?;

    Ok(success(employee, "Employee retrieved successfully").into_response())
}

pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateEmployeeRequest>,
) -> Result<Response, AppError> {
    let employee = Employee::from_request(req);
    let id = employee.id;

    if !state.store.insert(employee.clone()).await {
        return Err(AppError::Conflict(format!(
            "Employee with id '{}' already exists",
            id
        )));
    }

    tracing::info!(employee_id = %id, "Employee created");
    Ok(created(employee, "Employee created successfully").into_response())
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateEmployeeRequest>,
) -> Result<Response, AppError> {
    let employee = state
        .store
        .update(id, |e| req.apply(e))
        .await
        .ok_or_else(|| not_found(id))?;

    tracing::info!(employee_id = %id, "Employee updated");
    Ok(success(employee, "Employee updated successfully").into_response())
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    state.store.remove(id).await.ok_or_else(|| not_found(id))?;

    tracing::info!(employee_id = %id, "Employee deleted");
    Ok(empty_success("Employee deleted successfully").into_response())
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Employee with id '{}' was not found", id))
}
