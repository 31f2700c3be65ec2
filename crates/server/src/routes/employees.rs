use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;

use crate::dto::{EmployeeRequest, EmployeeResponse};
use crate::errors::{ApiError, ErrorResponse};
use crate::mapper::employees_to_response;
use crate::state::ServerState;

/// `pageIndex` + `pageSize` paginate and win over `gender`; with neither the full list is returned.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EmployeeQuery {
    /// 0-based page
    pub page_index: Option<u64>,
    pub page_size: Option<u64>,
    /// exact, case-sensitive
    pub gender: Option<String>,
}

#[utoipa::path(
    get, path = "/employees", tag = "employees",
    params(EmployeeQuery),
    responses(
        (status = 200, description = "List OK", body = [EmployeeResponse]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list(State(state): State<ServerState>, Query(q): Query<EmployeeQuery>) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let rows = match (q.page_index, q.page_size, q.gender) {
        (Some(index), Some(size), _) => state.employees.find_employees_by_pagination(index, size).await?,
        (_, _, Some(gender)) => state.employees.find_employee_by_gender(&gender).await?,
        _ => state.employees.find_employees().await?,
    };
    Ok(Json(employees_to_response(rows)))
}

#[utoipa::path(
    post, path = "/employees", tag = "employees",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Created", body = EmployeeResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<EmployeeRequest>) -> Result<(StatusCode, Json<EmployeeResponse>), ApiError> {
    let created = state.employees.add_employee(input.into()).await?;
    info!(id = created.id, "created employee");
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    get, path = "/employees/{id}", tag = "employees",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "OK", body = EmployeeResponse),
        (status = 404, description = "Not Found", body = ErrorResponse)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<EmployeeResponse>, ApiError> {
    let found = state.employees.find_employee_by_id(id).await?;
    Ok(Json(found.into()))
}

#[utoipa::path(
    put, path = "/employees/{id}", tag = "employees",
    params(("id" = i32, Path, description = "Employee ID")),
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Updated", body = EmployeeResponse),
        (status = 404, description = "Not Found", body = ErrorResponse)
    )
)]
pub async fn update(State(state): State<ServerState>, Path(id): Path<i32>, Json(patch): Json<EmployeeRequest>) -> Result<Json<EmployeeResponse>, ApiError> {
    let updated = state.employees.update_employee(id, patch.into()).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/employees/{id}", tag = "employees",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found", body = ErrorResponse)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    state.employees.delete_employee(id).await?;
    Ok(StatusCode::OK)
}
