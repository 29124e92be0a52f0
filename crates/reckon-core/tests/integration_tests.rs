//! Integration tests for reckon-core against the in-memory adapters.

use reckon_adapters::InMemoryHistory;
use reckon_core::{domain::DomainError, error::CalcError, prelude::*};

fn calculator() -> Calculator {
    Calculator::new(Box::new(InMemoryHistory::new()))
}

#[test]
fn history_grows_by_one_per_success() {
    let calc = calculator();

    calc.perform_operation(Operation::Addition, 5.0, 3.0).unwrap();
    calc.perform_operation(Operation::Subtraction, 10.0, 4.0)
        .unwrap();
    calc.perform_operation(Operation::Multiplication, 7.0, 3.0)
        .unwrap();

    assert_eq!(calc.history_len().unwrap(), 3);
}

#[test]
fn failures_leave_history_unchanged() {
    let calc = calculator();
    calc.perform_operation(Operation::Addition, 1.0, 1.0).unwrap();

    let err = calc
        .perform_operation(Operation::Division, 5.0, 0.0)
        .unwrap_err();
    assert!(matches!(
        err,
        CalcError::Domain(DomainError::DivisionByZero { .. })
    ));
    assert!(
        calc.perform_operation(Operation::Addition, f64::NAN, 1.0)
            .is_err()
    );

    assert_eq!(calc.history_len().unwrap(), 1);
}

#[test]
fn history_preserves_call_order() {
    let calc = calculator();
    calc.perform_operation(Operation::Division, 20.0, 5.0).unwrap();
    calc.perform_operation(Operation::Addition, 1.0, 2.0).unwrap();

    let lines: Vec<String> = calc
        .history()
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        lines,
        vec!["20.0 division 5.0 = 4.0", "1.0 addition 2.0 = 3.0"]
    );
}

#[test]
fn clear_resets_history() {
    let calc = calculator();
    calc.perform_operation(Operation::Addition, 1.0, 2.0).unwrap();
    calc.clear_history().unwrap();

    assert_eq!(calc.history_len().unwrap(), 0);
    assert!(calc.last().unwrap().is_none());
}

#[test]
fn calculators_over_one_store_share_history() {
    let store = InMemoryHistory::new();
    let first = Calculator::new(Box::new(store.clone()));
    let second = Calculator::new(Box::new(store));

    first.perform_operation(Operation::Addition, 1.0, 2.0).unwrap();

    let last = second.last().unwrap().unwrap();
    assert_eq!(last.operand1(), 1.0);
    assert_eq!(last.operand2(), 2.0);
    assert_eq!(last.operation(), Operation::Addition);
    assert_eq!(second.history_len().unwrap(), 1);
}

#[test]
fn calculation_serializes_to_json() {
    let calc = calculator();
    calc.perform_operation(Operation::Addition, 5.0, 3.0).unwrap();

    let json = serde_json::to_value(calc.last().unwrap().unwrap()).unwrap();
    assert_eq!(json["operation"], "addition");
    assert_eq!(json["result"], 8.0);
}
