use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait};

use models::{company, employee};

use super::domain::{CompanyDetails, CompanyInput};
use crate::errors::ServiceError;
use crate::pagination::Pagination;

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<CompanyDetails>, ServiceError>;
    async fn find_page(&self, page: Pagination) -> Result<Vec<CompanyDetails>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<CompanyDetails>, ServiceError>;
    /// Store the company and its nested employees atomically.
    async fn insert(&self, input: CompanyInput) -> Result<CompanyDetails, ServiceError>;
    async fn save(&self, company: company::Model) -> Result<company::Model, ServiceError>;
    /// Removes the company row only. `Ok(false)` when no row had that id.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmCompanyRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCompanyRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    async fn with_employees(&self, companies: Vec<company::Model>) -> Result<Vec<CompanyDetails>, ServiceError> {
        let employees = companies
            .load_many(employee::Entity::find().order_by_asc(employee::Column::Id), &self.db)
            .await?;
        Ok(companies
            .into_iter()
            .zip(employees)
            .map(|(company, employees)| CompanyDetails { company, employees })
            .collect())
    }
}

#[async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn find_all(&self) -> Result<Vec<CompanyDetails>, ServiceError> {
        let companies = company::Entity::find()
            .order_by_asc(company::Column::Id)
            .all(&self.db)
            .await?;
        self.with_employees(companies).await
    }

    async fn find_page(&self, page: Pagination) -> Result<Vec<CompanyDetails>, ServiceError> {
        let Some((page_idx, per_page)) = page.normalize() else { return Ok(Vec::new()) };
        let companies = company::Entity::find()
            .order_by_asc(company::Column::Id)
            .paginate(&self.db, per_page)
            .fetch_page(page_idx)
            .await?;
        self.with_employees(companies).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CompanyDetails>, ServiceError> {
        let Some(company) = company::Entity::find_by_id(id).one(&self.db).await? else { return Ok(None) };
        let employees = employee::Entity::find()
            .filter(employee::Column::CompanyId.eq(id))
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await?;
        Ok(Some(CompanyDetails { company, employees }))
    }

    async fn insert(&self, input: CompanyInput) -> Result<CompanyDetails, ServiceError> {
        let txn = self.db.begin().await?;
        let company = company::create(&txn, input.company_name).await?;
        let mut employees = Vec::with_capacity(input.employees.len());
        for nested in input.employees {
            let mut new: employee::NewEmployee = nested.into();
            new.company_id = Some(company.id);
            employees.push(employee::create(&txn, new).await?);
        }
        txn.commit().await?;
        Ok(CompanyDetails { company, employees })
    }

    async fn save(&self, company: company::Model) -> Result<company::Model, ServiceError> {
        Ok(company::save(&self.db, company).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = company::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct State {
        companies: BTreeMap<i32, company::Model>,
        employees: BTreeMap<i32, employee::Model>,
        last_company_id: i32,
        last_employee_id: i32,
    }

    impl State {
        fn details(&self, company: &company::Model) -> CompanyDetails {
            let employees = self
                .employees
                .values()
                .filter(|e| e.company_id == Some(company.id))
                .cloned()
                .collect();
            CompanyDetails { company: company.clone(), employees }
        }
    }

    #[derive(Default)]
    pub struct MockCompanyRepository {
        state: Mutex<State>,
    }

    impl MockCompanyRepository {
        fn lock(&self) -> Result<MutexGuard<'_, State>, ServiceError> {
            self.state.lock().map_err(|_| ServiceError::Db("mock store poisoned".into()))
        }

        /// Seed an employee row directly, as if written by another service.
        pub fn put_employee(&self, employee: employee::Model) -> Result<(), ServiceError> {
            let mut state = self.lock()?;
            state.last_employee_id = state.last_employee_id.max(employee.id);
            state.employees.insert(employee.id, employee);
            Ok(())
        }
    }

    #[async_trait]
    impl CompanyRepository for MockCompanyRepository {
        async fn find_all(&self) -> Result<Vec<CompanyDetails>, ServiceError> {
            let state = self.lock()?;
            Ok(state.companies.values().map(|c| state.details(c)).collect())
        }

        async fn find_page(&self, page: Pagination) -> Result<Vec<CompanyDetails>, ServiceError> {
            let state = self.lock()?;
            let all: Vec<_> = state.companies.values().cloned().collect();
            Ok(page.slice(&all).iter().map(|c| state.details(c)).collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<CompanyDetails>, ServiceError> {
            let state = self.lock()?;
            Ok(state.companies.get(&id).map(|c| state.details(c)))
        }

        async fn insert(&self, input: CompanyInput) -> Result<CompanyDetails, ServiceError> {
            let mut state = self.lock()?;
            state.last_company_id += 1;
            let company = company::Model { id: state.last_company_id, company_name: input.company_name };
            state.companies.insert(company.id, company.clone());
            for nested in input.employees {
                state.last_employee_id += 1;
                let row = employee::Model {
                    id: state.last_employee_id,
                    name: nested.name,
                    age: nested.age,
                    gender: nested.gender,
                    salary: nested.salary,
                    company_id: Some(company.id),
                };
                state.employees.insert(row.id, row);
            }
            Ok(state.details(&company))
        }

        async fn save(&self, company: company::Model) -> Result<company::Model, ServiceError> {
            let mut state = self.lock()?;
            match state.companies.get_mut(&company.id) {
                Some(slot) => {
                    *slot = company.clone();
                    Ok(company)
                }
                None => Err(ServiceError::Db(format!("no company row with id {}", company.id))),
            }
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.lock()?.companies.remove(&id).is_some())
        }
    }
}
