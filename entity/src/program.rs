use sea_orm::entity::prelude::*;

use crate::json::ProgramBenefits;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "program")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    pub instructor_id: Option<i32>,
    pub capacity: i32,
    pub price: i32,
    #[sea_orm(column_type = "Json")]
    pub benefits: ProgramBenefits,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
