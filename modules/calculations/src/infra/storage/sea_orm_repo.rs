use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    TransactionTrait,
};

use crate::domain::error::DomainError;
use crate::domain::model::{Calculation, NewCalculation};
use crate::domain::repo::CalculationsRepository;

use super::db_err;
use super::entity::{self, Entity as Calculations};

pub struct SeaOrmCalculationsRepository {
    db: DatabaseConnection,
}

impl SeaOrmCalculationsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CalculationsRepository for SeaOrmCalculationsRepository {
    async fn insert(&self, calc: NewCalculation) -> Result<Calculation, DomainError> {
        let active_model = entity::ActiveModel {
            id: ActiveValue::NotSet,
            first_operand: ActiveValue::Set(calc.first_operand),
            second_operand: ActiveValue::Set(calc.second_operand),
            operation: ActiveValue::Set(calc.operation),
            result: ActiveValue::Set(calc.result),
            owner_token: ActiveValue::Set(calc.owner_token),
        };

        let inserted = active_model.insert(&self.db).await.map_err(db_err)?;
        Ok(inserted.into())
    }

    async fn find_by_owner(&self, owner_token: &str) -> Result<Vec<Calculation>, DomainError> {
        let models = Calculations::find()
            .filter(entity::Column::OwnerToken.eq(owner_token))
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn delete_by_owner(&self, owner_token: &str) -> Result<Vec<Calculation>, DomainError> {
        // Select + delete in one transaction so the removal is
        // all-or-nothing and the returned set matches what was removed.
        let txn = self.db.begin().await.map_err(db_err)?;

        let models = Calculations::find()
            .filter(entity::Column::OwnerToken.eq(owner_token))
            .all(&txn)
            .await
            .map_err(db_err)?;

        if !models.is_empty() {
            Calculations::delete_many()
                .filter(entity::Column::OwnerToken.eq(owner_token))
                .exec(&txn)
                .await
                .map_err(db_err)?;
        }

        txn.commit().await.map_err(db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
