use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::company::repository::SeaOrmCompanyRepository;
use service::employee::repository::SeaOrmEmployeeRepository;
use service::{CompanyService, EmployeeService};

/// Shared handler state; cloning only bumps reference counts.
#[derive(Clone)]
pub struct ServerState {
    pub companies: Arc<CompanyService<SeaOrmCompanyRepository>>,
    pub employees: Arc<EmployeeService<SeaOrmEmployeeRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let company_repo = Arc::new(SeaOrmCompanyRepository::new(db.clone()));
        let employee_repo = Arc::new(SeaOrmEmployeeRepository::new(db));
        Self {
            companies: Arc::new(CompanyService::new(company_repo)),
            employees: Arc::new(EmployeeService::new(employee_repo)),
        }
    }
}
