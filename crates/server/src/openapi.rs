use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::dto::{CompanyRequest, CompanyResponse, EmployeeRequest, EmployeeResponse};
use crate::errors::ErrorResponse;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::companies::list,
        crate::routes::companies::create,
        crate::routes::companies::get,
        crate::routes::companies::update,
        crate::routes::companies::delete,
        crate::routes::companies::employees,
        crate::routes::employees::list,
        crate::routes::employees::create,
        crate::routes::employees::get,
        crate::routes::employees::update,
        crate::routes::employees::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CompanyRequest,
            CompanyResponse,
            EmployeeRequest,
            EmployeeResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "companies"),
        (name = "employees")
    )
)]
pub struct ApiDoc;
