use std::sync::Arc;
use tracing::{debug, info, instrument};

use models::employee;

use super::domain::EmployeeInput;
use super::repository::EmployeeRepository;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";
pub const EMPLOYEE_UPDATE_NOT_FOUND: &str = "Employee not found. Cannot update non-existent employee.";
pub const EMPLOYEE_DELETE_NOT_FOUND: &str = "Employee not found. Cannot delete non-existent employee.";

/// Employee business service independent of web framework
pub struct EmployeeService<R: EmployeeRepository> {
    repo: Arc<R>,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn find_employees(&self) -> Result<Vec<employee::Model>, ServiceError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn find_employee_by_id(&self, id: i32) -> Result<employee::Model, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| {
            debug!(id, "employee lookup missed");
            ServiceError::not_found(EMPLOYEE_NOT_FOUND)
        })
    }

    /// Exact, case-sensitive match on the stored gender.
    pub async fn find_employee_by_gender(&self, gender: &str) -> Result<Vec<employee::Model>, ServiceError> {
        self.repo.find_by_gender(gender).await
    }

    pub async fn find_employees_by_pagination(&self, page_index: u64, page_size: u64) -> Result<Vec<employee::Model>, ServiceError> {
        self.repo.find_page(Pagination::new(page_index, page_size)).await
    }

    /// Store a new employee. Nothing is validated; absent fields stay null.
    ///
    /// # Examples
    /// ```
    /// use service::employee::{domain::EmployeeInput, repository::mock::MockEmployeeRepository, EmployeeService};
    /// use std::sync::Arc;
    /// let svc = EmployeeService::new(Arc::new(MockEmployeeRepository::default()));
    /// let input = EmployeeInput { name: Some("russ".into()), age: Some(22), ..Default::default() };
    /// let stored = tokio_test::block_on(svc.add_employee(input)).unwrap();
    /// assert_eq!(stored.name.as_deref(), Some("russ"));
    /// assert_eq!(stored.gender, None);
    /// ```
    #[instrument(skip(self, input))]
    pub async fn add_employee(&self, input: EmployeeInput) -> Result<employee::Model, ServiceError> {
        let created = self.repo.insert(input).await?;
        info!(id = created.id, "employee created");
        Ok(created)
    }

    /// Overwrite the fields present in `patch`, keep the rest.
    #[instrument(skip(self, patch))]
    pub async fn update_employee(&self, id: i32, patch: EmployeeInput) -> Result<employee::Model, ServiceError> {
        let mut employee = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(EMPLOYEE_UPDATE_NOT_FOUND))?;
        patch.apply_to(&mut employee);
        let updated = self.repo.save(employee).await?;
        info!(id, "employee updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_employee(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(EMPLOYEE_DELETE_NOT_FOUND));
        }
        info!(id, "employee deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::repository::{mock::MockEmployeeRepository, SeaOrmEmployeeRepository};
    use crate::test_support::get_db;

    fn svc() -> EmployeeService<MockEmployeeRepository> {
        EmployeeService::new(Arc::new(MockEmployeeRepository::default()))
    }

    fn person(name: &str, age: i32, gender: &str, salary: i32) -> EmployeeInput {
        EmployeeInput { name: Some(name.into()), age: Some(age), gender: Some(gender.into()), salary: Some(salary), company_id: None }
    }

    #[tokio::test]
    async fn add_then_find_returns_same_fields() -> Result<(), anyhow::Error> {
        let svc = svc();
        let input = EmployeeInput { company_id: Some(3), ..person("marimar", 20, "female", 1122) };
        let created = svc.add_employee(input.clone()).await?;
        let found = svc.find_employee_by_id(created.id).await?;
        assert_eq!(found, created);
        assert_eq!(found.name, input.name);
        assert_eq!(found.age, input.age);
        assert_eq!(found.gender, input.gender);
        assert_eq!(found.salary, input.salary);
        assert_eq!(found.company_id, input.company_id);
        Ok(())
    }

    #[tokio::test]
    async fn missing_ids_fail_with_operation_specific_messages() {
        let svc = svc();
        let err = svc.find_employee_by_id(0).await.unwrap_err();
        assert_eq!(err.to_string(), "Employee not found");

        let err = svc.update_employee(99, person("russUpdated", 23, "female", 7000)).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Employee not found. Cannot update non-existent employee.");

        let err = svc.delete_employee(99).await.unwrap_err();
        assert_eq!(err.to_string(), "Employee not found. Cannot delete non-existent employee.");
    }

    #[tokio::test]
    async fn partial_update_keeps_omitted_fields() -> Result<(), anyhow::Error> {
        let svc = svc();
        let created = svc.add_employee(person("russel", 22, "male", 5000)).await?;

        let updated = svc
            .update_employee(created.id, EmployeeInput { salary: Some(7000), ..Default::default() })
            .await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name.as_deref(), Some("russel"));
        assert_eq!(updated.age, Some(22));
        assert_eq!(updated.gender.as_deref(), Some("male"));
        assert_eq!(updated.salary, Some(7000));

        let full = svc.update_employee(created.id, person("russUpdated", 23, "female", 7000)).await?;
        assert_eq!(full.name.as_deref(), Some("russUpdated"));
        assert_eq!(full.age, Some(23));
        assert_eq!(full.gender.as_deref(), Some("female"));
        assert_eq!(svc.find_employee_by_id(created.id).await?, full);
        Ok(())
    }

    #[tokio::test]
    async fn delete_then_find_fails() -> Result<(), anyhow::Error> {
        let svc = svc();
        let created = svc.add_employee(person("janley", 18, "male", 80000)).await?;
        svc.delete_employee(created.id).await?;
        assert!(svc.find_employee_by_id(created.id).await.unwrap_err().is_not_found());
        assert!(svc.delete_employee(created.id).await.unwrap_err().is_not_found());
        Ok(())
    }

    #[tokio::test]
    async fn gender_filter_and_pagination_follow_store_order() -> Result<(), anyhow::Error> {
        let svc = EmployeeService::new(Arc::new(SeaOrmEmployeeRepository::new(get_db().await?)));
        let russ = svc.add_employee(person("russ", 22, "male", 5000)).await?;
        let janley = svc.add_employee(person("janley", 18, "male", 80000)).await?;
        let barbie = svc.add_employee(person("barbie", 20, "female", 9999)).await?;
        svc.add_employee(person("shouty", 30, "MALE", 1)).await?;

        assert_eq!(svc.find_employee_by_gender("male").await?, vec![russ.clone(), janley.clone()]);
        assert_eq!(svc.find_employee_by_gender("female").await?, vec![barbie]);
        assert!(svc.find_employee_by_gender("Male").await?.is_empty());

        assert_eq!(svc.find_employees_by_pagination(0, 2).await?, vec![russ, janley]);
        assert!(svc.find_employees_by_pagination(10, 2).await?.is_empty());
        assert_eq!(svc.find_employees().await?.len(), 4);
        Ok(())
    }
}
