//! Database error conversion helpers and storage wiring.

use std::fmt::Display;

use crate::domain::error::DomainError;

pub mod entity;
pub mod migrations;
pub mod sea_orm_repo;

#[cfg(test)]
mod mapper_test;

/// Convert any displayable error into a `DomainError::Database`.
pub fn db_err(e: impl Display) -> DomainError {
    DomainError::database(e.to_string())
}
