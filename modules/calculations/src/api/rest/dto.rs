use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::model::Calculation;
use crate::domain::service::CreateCalculation;

/// Create-and-compute request body. Every field is optional on the
/// wire; the contract is enforced by the service, not by serde.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCalculationRequest {
    pub first_operand: Option<Decimal>,
    pub second_operand: Option<Decimal>,
    pub operation: Option<i32>,
    pub owner_token: Option<String>,
}

impl From<CreateCalculationRequest> for CreateCalculation {
    fn from(req: CreateCalculationRequest) -> Self {
        Self {
            first_operand: req.first_operand,
            second_operand: req.second_operand,
            operation: req.operation,
            owner_token: req.owner_token,
        }
    }
}

/// Owner token carried as a query parameter on reads and deletes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenQuery {
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationDto {
    pub id: i32,
    pub first_operand: Decimal,
    pub second_operand: Decimal,
    pub operation: i32,
    pub result: Decimal,
    pub owner_token: String,
}

impl From<Calculation> for CalculationDto {
    fn from(calc: Calculation) -> Self {
        Self {
            id: calc.id,
            first_operand: calc.first_operand,
            second_operand: calc.second_operand,
            operation: calc.operation,
            result: calc.result,
            owner_token: calc.owner_token,
        }
    }
}
