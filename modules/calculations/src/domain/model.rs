use rust_decimal::Decimal;

use crate::domain::error::DomainError;

/// Operation code for addition.
pub const OP_ADD: i32 = 1;
/// Operation code for subtraction (first minus second).
pub const OP_SUBTRACT: i32 = 2;
/// Operation code for multiplication.
pub const OP_MULTIPLY: i32 = 3;
/// The "unset" sentinel; never a valid operation.
pub const OP_UNSET: i32 = 0;

/// A persisted calculation with its store-assigned id.
///
/// Immutable after creation; removed only via owner-scoped bulk
/// delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub id: i32,
    pub first_operand: Decimal,
    pub second_operand: Decimal,
    pub operation: i32,
    pub result: Decimal,
    pub owner_token: String,
}

/// A validated, computed calculation awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCalculation {
    pub first_operand: Decimal,
    pub second_operand: Decimal,
    pub operation: i32,
    pub result: Decimal,
    pub owner_token: String,
}

/// Every operation code outside {1, 2, 3} computes a quotient. The
/// divide-by-zero guard is exactly as wide as this fallback.
fn is_divide(operation: i32) -> bool {
    !matches!(operation, OP_ADD | OP_SUBTRACT | OP_MULTIPLY)
}

impl NewCalculation {
    /// Factory: validates the invariants and computes the result.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when a divide code meets a zero second
    /// operand; `Construction` when the result overflows or any other
    /// invariant is violated.
    pub fn build(
        first_operand: Decimal,
        second_operand: Decimal,
        operation: i32,
        owner_token: String,
    ) -> Result<Self, DomainError> {
        if is_divide(operation) && second_operand.is_zero() {
            return Err(DomainError::DivisionByZero);
        }
        if operation == OP_UNSET {
            return Err(DomainError::construction("Operation must not be unset."));
        }
        if owner_token.is_empty() {
            return Err(DomainError::construction("Owner token must not be empty."));
        }

        // Zero divisors were rejected above, so a None here is only
        // ever an out-of-range result.
        let result = match operation {
            OP_ADD => first_operand.checked_add(second_operand),
            OP_SUBTRACT => first_operand.checked_sub(second_operand),
            OP_MULTIPLY => first_operand.checked_mul(second_operand),
            _ => first_operand.checked_div(second_operand),
        }
        .ok_or_else(|| DomainError::construction("Result out of range."))?;

        Ok(Self {
            first_operand,
            second_operand,
            operation,
            result,
            owner_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn add_subtract_multiply_compute_exactly() {
        let cases = [
            (OP_ADD, dec(10)),
            (OP_SUBTRACT, dec(4)),
            (OP_MULTIPLY, dec(21)),
        ];
        for (op, expected) in cases {
            let calc = NewCalculation::build(dec(7), dec(3), op, "u".into()).unwrap();
            assert_eq!(calc.result, expected, "operation {op}");
        }
    }

    #[test]
    fn unknown_codes_fall_back_to_divide() {
        for op in [4, 5, -1, 99] {
            let calc = NewCalculation::build(dec(12), dec(3), op, "u".into()).unwrap();
            assert_eq!(calc.result, dec(4), "operation {op}");
        }
    }

    #[test]
    fn divide_by_zero_rejected_for_every_divide_code() {
        for op in [4, 5, -1, 99] {
            let err = NewCalculation::build(dec(1), dec(0), op, "u".into()).unwrap_err();
            assert!(matches!(err, DomainError::DivisionByZero), "operation {op}");
        }
    }

    #[test]
    fn zero_second_operand_fine_for_non_divide_codes() {
        for (op, expected) in [(OP_ADD, dec(5)), (OP_SUBTRACT, dec(5)), (OP_MULTIPLY, dec(0))] {
            let calc = NewCalculation::build(dec(5), dec(0), op, "u".into()).unwrap();
            assert_eq!(calc.result, expected, "operation {op}");
        }
    }

    #[test]
    fn overflowing_results_are_construction_errors() {
        let cases = [
            (Decimal::MAX, Decimal::MAX, OP_ADD),
            (Decimal::MIN, Decimal::MAX, OP_SUBTRACT),
            (Decimal::MAX, dec(2), OP_MULTIPLY),
        ];
        for (first, second, op) in cases {
            let err = NewCalculation::build(first, second, op, "u".into()).unwrap_err();
            assert!(matches!(err, DomainError::Construction(_)), "operation {op}");
        }
    }

    #[test]
    fn overflowing_quotient_is_not_reported_as_division_by_zero() {
        // Non-zero divisor, so the zero guard passes; the overflow
        // must surface as out-of-range, not divide-by-zero.
        let err =
            NewCalculation::build(Decimal::MAX, Decimal::new(5, 1), 4, "u".into()).unwrap_err();
        assert!(matches!(err, DomainError::Construction(_)));
    }

    #[test]
    fn unset_operation_is_a_construction_error() {
        let err = NewCalculation::build(dec(1), dec(2), OP_UNSET, "u".into()).unwrap_err();
        assert!(matches!(err, DomainError::Construction(_)));
    }

    #[test]
    fn empty_owner_token_is_a_construction_error() {
        let err = NewCalculation::build(dec(1), dec(2), OP_ADD, String::new()).unwrap_err();
        assert!(matches!(err, DomainError::Construction(_)));
    }
}
