use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::model::{Calculation, NewCalculation};

/// Repository trait for calculation persistence.
///
/// Lookup is an exact, case-sensitive match on the owner token; no
/// ordering guarantee is made for the returned sequences.
#[async_trait]
pub trait CalculationsRepository: Send + Sync {
    /// Persist a calculation, returning it with its assigned id.
    async fn insert(&self, calc: NewCalculation) -> Result<Calculation, DomainError>;

    /// All calculations owned by `owner_token`; empty when none match.
    async fn find_by_owner(&self, owner_token: &str) -> Result<Vec<Calculation>, DomainError>;

    /// Remove and return every calculation owned by `owner_token` as a
    /// single unit of work; empty when none matched.
    async fn delete_by_owner(&self, owner_token: &str) -> Result<Vec<Calculation>, DomainError>;
}
