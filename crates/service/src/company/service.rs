use std::sync::Arc;
use tracing::{debug, info, instrument};

use models::employee;

use super::domain::{CompanyDetails, CompanyInput};
use super::repository::CompanyRepository;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

pub const COMPANY_NOT_FOUND: &str = "Company not found";
pub const COMPANY_UPDATE_NOT_FOUND: &str = "Company not found. Cannot update non-existent company.";
pub const COMPANY_DELETE_NOT_FOUND: &str = "Company not found. Cannot delete non-existent company.";

/// Application service encapsulating company rules.
pub struct CompanyService<R: CompanyRepository> {
    repo: Arc<R>,
}

impl<R: CompanyRepository> CompanyService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn find_companies(&self) -> Result<Vec<CompanyDetails>, ServiceError> {
        self.repo.find_all().await
    }

    /// Store a company and any nested employees; no field is required.
    #[instrument(skip(self, input), fields(employees = input.employees.len()))]
    pub async fn add_company(&self, input: CompanyInput) -> Result<CompanyDetails, ServiceError> {
        let created = self.repo.insert(input).await?;
        info!(id = created.company.id, "company created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn find_company_by_id(&self, id: i32) -> Result<CompanyDetails, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| {
            debug!(id, "company lookup missed");
            ServiceError::not_found(COMPANY_NOT_FOUND)
        })
    }

    /// Rename the company when `patch.company_name` is present. Nested employees in the patch are ignored.
    #[instrument(skip(self, patch))]
    pub async fn update_company(&self, id: i32, patch: CompanyInput) -> Result<CompanyDetails, ServiceError> {
        let CompanyDetails { mut company, employees } = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(COMPANY_UPDATE_NOT_FOUND))?;
        patch.apply_to(&mut company);
        let company = self.repo.save(company).await?;
        info!(id, "company updated");
        Ok(CompanyDetails { company, employees })
    }

    /// Remove the company row. Employees keep their (now stale) `company_id`.
    #[instrument(skip(self))]
    pub async fn delete_company(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(COMPANY_DELETE_NOT_FOUND));
        }
        info!(id, "company deleted");
        Ok(())
    }

    /// Employees of a company, or `None` when the company does not exist.
    ///
    /// Unlike [`Self::find_company_by_id`] an unknown id is not an error here.
    pub async fn get_company_employees(&self, id: i32) -> Result<Option<Vec<employee::Model>>, ServiceError> {
        Ok(self.repo.find_by_id(id).await?.map(|details| details.employees))
    }

    pub async fn find_companies_by_pagination(&self, page_index: u64, page_size: u64) -> Result<Vec<CompanyDetails>, ServiceError> {
        self.repo.find_page(Pagination::new(page_index, page_size)).await
    }
}
