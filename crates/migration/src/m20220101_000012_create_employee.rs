//! Create `employee` table.
//!
//! `company_id` references `company.id` but carries no FK constraint:
//! deleting a company must leave its employees (and their stale reference) untouched.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(pk_auto(Employee::Id))
                    .col(string_len_null(Employee::Name, 255))
                    .col(integer_null(Employee::Age))
                    .col(string_null(Employee::Gender))
                    .col(integer_null(Employee::Salary))
                    .col(integer_null(Employee::CompanyId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employee::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Employee { Table, Id, Name, Age, Gender, Salary, CompanyId }
