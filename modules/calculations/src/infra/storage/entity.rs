use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

use crate::domain::model::Calculation;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "calculations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_operand: Decimal,
    pub second_operand: Decimal,
    pub operation: i32,
    pub result: Decimal,
    pub owner_token: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Calculation {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            first_operand: model.first_operand,
            second_operand: model.second_operand,
            operation: model.operation,
            result: model.result,
            owner_token: model.owner_token,
        }
    }
}
