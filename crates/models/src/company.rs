use sea_orm::{entity::prelude::*, ConnectionTrait, Set, Unchanged};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::employee;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Employees,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Employees => Entity::has_many(employee::Entity).into() }
    }
}

impl Related<employee::Entity> for Entity {
    fn to() -> RelationDef { Relation::Employees.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a company; the id is assigned by the store.
pub async fn create<C: ConnectionTrait>(db: &C, company_name: Option<String>) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        company_name: Set(company_name),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Write the mutable columns of `model` back to its row.
pub async fn save<C: ConnectionTrait>(db: &C, model: Model) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Unchanged(model.id),
        company_name: Set(model.company_name),
    };
    Ok(am.update(db).await?)
}
