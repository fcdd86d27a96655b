/// Domain-level errors for the calculations module.
///
/// Every validation and "not found" condition is a client-facing
/// error; only `Database` may surface as a server fault. Construction
/// failures deliberately stay client-facing with their message passed
/// through verbatim.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Token missing!")]
    MissingToken,

    #[error("Math equation not complete!")]
    IncompleteEquation,

    #[error("Cannot divide by zero.")]
    DivisionByZero,

    #[error("{0}")]
    Construction(String),

    #[error("No history found!")]
    NoHistoryFound,

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}

impl DomainError {
    pub fn construction(message: impl Into<String>) -> Self {
        Self::Construction(message.into())
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(anyhow::anyhow!(message.into()))
    }
}
