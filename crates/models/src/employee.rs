use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, Set, Unchanged};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::company;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub salary: Option<i32>,
    /// Plain reference; may point at a company that no longer exists.
    pub company_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Company,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Company => Entity::belongs_to(company::Entity).from(Column::CompanyId).to(company::Column::Id).into() }
    }
}

impl Related<company::Entity> for Entity {
    fn to() -> RelationDef { Relation::Company.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Column values for a row that has not been stored yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub salary: Option<i32>,
    pub company_id: Option<i32>,
}

/// Insert an employee; the id is assigned by the store.
pub async fn create<C: ConnectionTrait>(db: &C, new: NewEmployee) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(new.name),
        age: Set(new.age),
        gender: Set(new.gender),
        salary: Set(new.salary),
        company_id: Set(new.company_id),
    };
    Ok(am.insert(db).await?)
}

/// Write every mutable column of `model` back to its row.
pub async fn save<C: ConnectionTrait>(db: &C, model: Model) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Unchanged(model.id),
        name: Set(model.name),
        age: Set(model.age),
        gender: Set(model.gender),
        salary: Set(model.salary),
        company_id: Set(model.company_id),
    };
    Ok(am.update(db).await?)
}
