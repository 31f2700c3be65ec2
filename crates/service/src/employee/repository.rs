use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use models::employee;

use super::domain::EmployeeInput;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Persistence operations the employee service relies on.
///
/// Listings come back in store order (ascending id).
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<employee::Model>, ServiceError>;
    async fn find_page(&self, page: Pagination) -> Result<Vec<employee::Model>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<employee::Model>, ServiceError>;
    async fn find_by_gender(&self, gender: &str) -> Result<Vec<employee::Model>, ServiceError>;
    async fn insert(&self, input: EmployeeInput) -> Result<employee::Model, ServiceError>;
    async fn save(&self, employee: employee::Model) -> Result<employee::Model, ServiceError>;
    /// `Ok(false)` when no row had that id.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmEmployeeRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<employee::Model>, ServiceError> {
        let rows = employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn find_page(&self, page: Pagination) -> Result<Vec<employee::Model>, ServiceError> {
        let Some((page_idx, per_page)) = page.normalize() else { return Ok(Vec::new()) };
        let rows = employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .paginate(&self.db, per_page)
            .fetch_page(page_idx)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<employee::Model>, ServiceError> {
        Ok(employee::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_by_gender(&self, gender: &str) -> Result<Vec<employee::Model>, ServiceError> {
        let rows = employee::Entity::find()
            .filter(employee::Column::Gender.eq(gender))
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn insert(&self, input: EmployeeInput) -> Result<employee::Model, ServiceError> {
        Ok(employee::create(&self.db, input.into()).await?)
    }

    async fn save(&self, employee: employee::Model) -> Result<employee::Model, ServiceError> {
        Ok(employee::save(&self.db, employee).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = employee::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

/// Simple in-memory mock repository for tests, benches and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct State {
        rows: BTreeMap<i32, employee::Model>, // key: id, iteration order == store order
        last_id: i32,
    }

    #[derive(Default)]
    pub struct MockEmployeeRepository {
        state: Mutex<State>,
    }

    impl MockEmployeeRepository {
        fn lock(&self) -> Result<MutexGuard<'_, State>, ServiceError> {
            self.state.lock().map_err(|_| ServiceError::Db("mock store poisoned".into()))
        }
    }

    #[async_trait]
    impl EmployeeRepository for MockEmployeeRepository {
        async fn find_all(&self) -> Result<Vec<employee::Model>, ServiceError> {
            Ok(self.lock()?.rows.values().cloned().collect())
        }

        async fn find_page(&self, page: Pagination) -> Result<Vec<employee::Model>, ServiceError> {
            let state = self.lock()?;
            let all: Vec<_> = state.rows.values().cloned().collect();
            Ok(page.slice(&all))
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<employee::Model>, ServiceError> {
            Ok(self.lock()?.rows.get(&id).cloned())
        }

        async fn find_by_gender(&self, gender: &str) -> Result<Vec<employee::Model>, ServiceError> {
            let state = self.lock()?;
            Ok(state.rows.values().filter(|e| e.gender.as_deref() == Some(gender)).cloned().collect())
        }

        async fn insert(&self, input: EmployeeInput) -> Result<employee::Model, ServiceError> {
            let mut state = self.lock()?;
            state.last_id += 1;
            let row = employee::Model {
                id: state.last_id,
                name: input.name,
                age: input.age,
                gender: input.gender,
                salary: input.salary,
                company_id: input.company_id,
            };
            state.rows.insert(row.id, row.clone());
            Ok(row)
        }

        async fn save(&self, employee: employee::Model) -> Result<employee::Model, ServiceError> {
            let mut state = self.lock()?;
            match state.rows.get_mut(&employee.id) {
                Some(slot) => {
                    *slot = employee.clone();
                    Ok(employee)
                }
                None => Err(ServiceError::Db(format!("no employee row with id {}", employee.id))),
            }
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.lock()?.rows.remove(&id).is_some())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn input(name: &str, gender: &str) -> EmployeeInput {
        EmployeeInput {
            name: Some(name.into()),
            age: Some(20),
            gender: Some(gender.into()),
            salary: Some(1000),
            company_id: None,
        }
    }

    #[tokio::test]
    async fn seaorm_repository_roundtrip() -> Result<(), anyhow::Error> {
        let repo = SeaOrmEmployeeRepository::new(get_db().await?);

        let russ = repo.insert(input("russ", "male")).await?;
        let janley = repo.insert(input("janley", "male")).await?;
        let barbie = repo.insert(input("barbie", "female")).await?;

        assert_eq!(repo.find_all().await?, vec![russ.clone(), janley.clone(), barbie.clone()]);
        assert_eq!(repo.find_by_id(janley.id).await?, Some(janley.clone()));
        assert_eq!(repo.find_by_gender("male").await?, vec![russ.clone(), janley.clone()]);
        assert!(repo.find_by_gender("MALE").await?.is_empty());

        assert_eq!(repo.find_page(Pagination::new(0, 2)).await?, vec![russ.clone(), janley.clone()]);
        assert_eq!(repo.find_page(Pagination::new(1, 2)).await?, vec![barbie.clone()]);
        assert!(repo.find_page(Pagination::new(5, 2)).await?.is_empty());
        assert!(repo.find_page(Pagination::new(0, 0)).await?.is_empty());

        let mut changed = barbie.clone();
        changed.salary = Some(9999);
        assert_eq!(repo.save(changed.clone()).await?, changed);

        assert!(repo.delete(russ.id).await?);
        assert!(!repo.delete(russ.id).await?);
        assert_eq!(repo.find_by_id(russ.id).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_pages_outside_sql_range() -> Result<(), anyhow::Error> {
        let repo = SeaOrmEmployeeRepository::new(get_db().await?);
        let russ = repo.insert(input("russ", "male")).await?;
        let janley = repo.insert(input("janley", "male")).await?;

        assert!(repo.find_page(Pagination::new(i64::MAX as u64, 2)).await?.is_empty());
        assert!(repo.find_page(Pagination::new(u64::MAX, 2)).await?.is_empty());
        assert!(repo.find_page(Pagination::new(1 << 62, 2)).await?.is_empty());
        assert_eq!(repo.find_page(Pagination::new(0, u64::MAX)).await?, vec![russ, janley]);
        assert!(repo.find_page(Pagination::new(1, u64::MAX)).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn mock_repository_behaves_like_store() -> Result<(), anyhow::Error> {
        let repo = mock::MockEmployeeRepository::default();
        let a = repo.insert(input("a", "male")).await?;
        let b = repo.insert(input("b", "female")).await?;
        assert!(b.id > a.id);
        assert_eq!(repo.find_page(Pagination::new(0, 1)).await?, vec![a.clone()]);
        assert_eq!(repo.find_by_gender("female").await?, vec![b.clone()]);
        assert!(repo.delete(a.id).await?);
        assert!(repo.save(a).await.is_err());
        Ok(())
    }
}
