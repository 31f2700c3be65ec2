//! Wire shapes of the REST API. Field names are camelCase; every field of a
//! request is optional and unknown fields (including a client-sent `id`) are ignored.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub salary: Option<i32>,
    pub company_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: i32,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub salary: Option<i32>,
    pub company_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRequest {
    pub company_name: Option<String>,
    /// Stored and linked to the new company on creation; ignored on update.
    #[serde(default)]
    pub employees: Vec<EmployeeRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub id: i32,
    pub company_name: Option<String>,
    pub employees: Vec<EmployeeResponse>,
}
