use rust_decimal::Decimal;

use super::entity::Model;
use crate::domain::model::Calculation;

#[test]
fn model_maps_to_domain_record_field_for_field() {
    let model = Model {
        id: 7,
        first_operand: Decimal::from(5),
        second_operand: Decimal::from(3),
        operation: 2,
        result: Decimal::from(2),
        owner_token: "user-A".to_owned(),
    };

    let calc: Calculation = model.into();

    assert_eq!(calc.id, 7);
    assert_eq!(calc.first_operand, Decimal::from(5));
    assert_eq!(calc.second_operand, Decimal::from(3));
    assert_eq!(calc.operation, 2);
    assert_eq!(calc.result, Decimal::from(2));
    assert_eq!(calc.owner_token, "user-A");
}
