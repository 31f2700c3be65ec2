use models::employee;
use service::company::domain::{CompanyDetails, CompanyInput};
use service::employee::domain::EmployeeInput;

use crate::dto::{CompanyRequest, CompanyResponse, EmployeeRequest, EmployeeResponse};

impl From<EmployeeRequest> for EmployeeInput {
    fn from(r: EmployeeRequest) -> Self {
        Self { name: r.name, age: r.age, gender: r.gender, salary: r.salary, company_id: r.company_id }
    }
}

impl From<employee::Model> for EmployeeResponse {
    fn from(m: employee::Model) -> Self {
        Self { id: m.id, name: m.name, age: m.age, gender: m.gender, salary: m.salary, company_id: m.company_id }
    }
}

impl From<CompanyRequest> for CompanyInput {
    fn from(r: CompanyRequest) -> Self {
        Self {
            company_name: r.company_name,
            employees: r.employees.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CompanyDetails> for CompanyResponse {
    fn from(d: CompanyDetails) -> Self {
        Self {
            id: d.company.id,
            company_name: d.company.company_name,
            employees: d.employees.into_iter().map(Into::into).collect(),
        }
    }
}

pub fn employees_to_response(rows: Vec<employee::Model>) -> Vec<EmployeeResponse> {
    rows.into_iter().map(Into::into).collect()
}

pub fn companies_to_response(rows: Vec<CompanyDetails>) -> Vec<CompanyResponse> {
    rows.into_iter().map(Into::into).collect()
}
