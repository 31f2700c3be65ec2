


use anyhow::Result;
use sea_orm::DatabaseConnection;

use crate::db::{connect_and_migrate, DatabaseConfig};

/// Fresh migrated in-memory database; every call is isolated from the others.
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    connect_and_migrate(&DatabaseConfig::in_memory()).await
}

/// Relationship tests across company and employee
pub mod relation_tests {
    use super::setup_test_db;
    use crate::{company, employee};
    use anyhow::Result;
    use sea_orm::{EntityTrait, LoaderTrait, ModelTrait, QueryOrder};

    fn new_employee(name: &str, company_id: Option<i32>) -> employee::NewEmployee {
        employee::NewEmployee {
            name: Some(name.into()),
            age: Some(30),
            gender: Some("female".into()),
            salary: Some(1000),
            company_id,
        }
    }

    /// Employees are reachable from their company through the has-many relation
    #[tokio::test]
    async fn test_company_employees_relation() -> Result<()> {
        let db = setup_test_db().await?;

        let oocl = company::create(&db, Some("OOCL".into())).await?;
        let other = company::create(&db, Some("COSCO".into())).await?;
        let a = employee::create(&db, new_employee("a", Some(oocl.id))).await?;
        let b = employee::create(&db, new_employee("b", Some(oocl.id))).await?;
        let c = employee::create(&db, new_employee("c", Some(other.id))).await?;
        employee::create(&db, new_employee("loner", None)).await?;

        let related = oocl.find_related(employee::Entity).all(&db).await?;
        assert_eq!(related, vec![a.clone(), b.clone()]);

        let companies = company::Entity::find().order_by_asc(company::Column::Id).all(&db).await?;
        let loaded = companies
            .load_many(employee::Entity::find().order_by_asc(employee::Column::Id), &db)
            .await?;
        assert_eq!(loaded, vec![vec![a, b], vec![c]]);
        Ok(())
    }

    /// Deleting a company leaves employees and their stale reference untouched
    #[tokio::test]
    async fn test_company_delete_does_not_cascade() -> Result<()> {
        let db = setup_test_db().await?;

        let oocl = company::create(&db, Some("OOCL".into())).await?;
        let emp = employee::create(&db, new_employee("russ", Some(oocl.id))).await?;

        let res = company::Entity::delete_by_id(oocl.id).exec(&db).await?;
        assert_eq!(res.rows_affected, 1);

        let still_there = employee::Entity::find_by_id(emp.id).one(&db).await?;
        assert_eq!(still_there.and_then(|e| e.company_id), Some(oocl.id));
        Ok(())
    }
}
