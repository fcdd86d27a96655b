//! Calculations Module
//!
//! Owner-scoped arithmetic calculation history: clients submit two
//! operands and an operation code, the service computes and persists
//! the result, and owners can list or bulk-delete their history.

pub mod api;
pub mod domain;
pub mod infra;

pub use domain::model::{Calculation, NewCalculation};
pub use domain::service::{CreateCalculation, Service};
