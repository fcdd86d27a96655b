use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::domain::error::DomainError;
use crate::domain::model::{Calculation, NewCalculation, OP_UNSET};
use crate::domain::repo::CalculationsRepository;

/// Create-and-compute input as it arrives from transport: every field
/// optional, the required/optional contract enforced here.
#[derive(Debug, Clone, Default)]
pub struct CreateCalculation {
    pub first_operand: Option<Decimal>,
    pub second_operand: Option<Decimal>,
    pub operation: Option<i32>,
    pub owner_token: Option<String>,
}

/// Calculation service: validation, arithmetic, and store
/// orchestration. Holds an injected repository handle; no global
/// state.
pub struct Service {
    repo: Arc<dyn CalculationsRepository>,
}

impl Service {
    pub fn new(repo: Arc<dyn CalculationsRepository>) -> Self {
        Self { repo }
    }

    /// Validate, compute, and persist a calculation.
    ///
    /// # Errors
    ///
    /// `MissingToken`, `IncompleteEquation`, `DivisionByZero`, or
    /// `Construction` on invalid input; `Database` on storage failure.
    #[instrument(skip(self, req))]
    pub async fn create_and_compute(
        &self,
        req: CreateCalculation,
    ) -> Result<Calculation, DomainError> {
        let owner_token = match req.owner_token {
            Some(token) if !token.is_empty() => token,
            _ => return Err(DomainError::MissingToken),
        };
        let (Some(first), Some(second)) = (req.first_operand, req.second_operand) else {
            return Err(DomainError::IncompleteEquation);
        };
        let operation = match req.operation {
            Some(op) if op != OP_UNSET => op,
            _ => return Err(DomainError::IncompleteEquation),
        };

        let record = NewCalculation::build(first, second, operation, owner_token)?;

        debug!(operation, "Persisting computed calculation");
        self.repo.insert(record).await
    }

    /// All calculations owned by `owner_token`.
    ///
    /// # Errors
    ///
    /// `MissingToken` when the token is absent, `NoHistoryFound` when
    /// the owner has no records, `Database` on storage failure.
    #[instrument(skip(self, owner_token))]
    pub async fn history(
        &self,
        owner_token: Option<&str>,
    ) -> Result<Vec<Calculation>, DomainError> {
        let token = Self::require_token(owner_token)?;

        let items = self.repo.find_by_owner(token).await?;
        if items.is_empty() {
            return Err(DomainError::NoHistoryFound);
        }

        debug!(count = items.len(), "Found calculation history");
        Ok(items)
    }

    /// Atomically remove and return every calculation owned by
    /// `owner_token`.
    ///
    /// # Errors
    ///
    /// `MissingToken` when the token is absent, `NoHistoryFound` when
    /// nothing was removed, `Database` on storage failure.
    #[instrument(skip(self, owner_token))]
    pub async fn delete_history(
        &self,
        owner_token: Option<&str>,
    ) -> Result<Vec<Calculation>, DomainError> {
        let token = Self::require_token(owner_token)?;

        let removed = self.repo.delete_by_owner(token).await?;
        if removed.is_empty() {
            return Err(DomainError::NoHistoryFound);
        }

        debug!(count = removed.len(), "Deleted calculation history");
        Ok(removed)
    }

    fn require_token(owner_token: Option<&str>) -> Result<&str, DomainError> {
        match owner_token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(DomainError::MissingToken),
        }
    }
}
