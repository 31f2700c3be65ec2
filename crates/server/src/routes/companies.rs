use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;

use crate::dto::{CompanyRequest, CompanyResponse, EmployeeResponse};
use crate::errors::{ApiError, ErrorResponse};
use crate::mapper::{companies_to_response, employees_to_response};
use crate::state::ServerState;

/// Both parameters are needed to paginate; otherwise the full list is returned.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CompanyQuery {
    pub page_index: Option<u64>,
    pub page_size: Option<u64>,
}

#[utoipa::path(
    get, path = "/companies", tag = "companies",
    params(CompanyQuery),
    responses(
        (status = 200, description = "List OK", body = [CompanyResponse]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list(State(state): State<ServerState>, Query(q): Query<CompanyQuery>) -> Result<Json<Vec<CompanyResponse>>, ApiError> {
    let rows = match (q.page_index, q.page_size) {
        (Some(index), Some(size)) => state.companies.find_companies_by_pagination(index, size).await?,
        _ => state.companies.find_companies().await?,
    };
    Ok(Json(companies_to_response(rows)))
}

#[utoipa::path(
    post, path = "/companies", tag = "companies",
    request_body = CompanyRequest,
    responses(
        (status = 201, description = "Created", body = CompanyResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<CompanyRequest>) -> Result<(StatusCode, Json<CompanyResponse>), ApiError> {
    let created = state.companies.add_company(input.into()).await?;
    info!(id = created.company.id, employees = created.employees.len(), "created company");
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    get, path = "/companies/{id}", tag = "companies",
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "OK", body = CompanyResponse),
        (status = 404, description = "Not Found", body = ErrorResponse)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<CompanyResponse>, ApiError> {
    let found = state.companies.find_company_by_id(id).await?;
    Ok(Json(found.into()))
}

#[utoipa::path(
    put, path = "/companies/{id}", tag = "companies",
    params(("id" = i32, Path, description = "Company ID")),
    request_body = CompanyRequest,
    responses(
        (status = 200, description = "Updated", body = CompanyResponse),
        (status = 404, description = "Not Found", body = ErrorResponse)
    )
)]
pub async fn update(State(state): State<ServerState>, Path(id): Path<i32>, Json(patch): Json<CompanyRequest>) -> Result<Json<CompanyResponse>, ApiError> {
    let updated = state.companies.update_company(id, patch.into()).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/companies/{id}", tag = "companies",
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found", body = ErrorResponse)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    state.companies.delete_company(id).await?;
    Ok(StatusCode::OK)
}

// 公司不存在时返回 200 + null，而不是 404
#[utoipa::path(
    get, path = "/companies/{id}/employees", tag = "companies",
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Employees of the company, null when the company does not exist", body = [EmployeeResponse])
    )
)]
pub async fn employees(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Option<Vec<EmployeeResponse>>>, ApiError> {
    let rows = state.companies.get_company_employees(id).await?;
    Ok(Json(rows.map(employees_to_response)))
}
