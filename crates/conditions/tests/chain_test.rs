//! End-to-end behaviour of check chains through the public API.

use std::cell::Cell;

use nebula_conditions::prelude::*;
use nebula_conditions::sequence;
use pretty_assertions::assert_eq;

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn passing_check_returns_the_same_validator() {
    let x = 5;
    let v = requires(&x, "x");
    let returned = v.is_greater_or_equal(0).unwrap();
    assert!(std::ptr::eq(returned, &v));
    assert_eq!(*returned.value(), 5);
}

#[test]
fn negative_argument_is_out_of_range() {
    let err = requires(&-1, "x").is_greater_or_equal(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentOutOfRange);
    assert!(err.message().contains('x'));
    assert!(err.message().contains("greater than or equal to 0"));
    assert_eq!(
        err.to_string(),
        "x should be greater than or equal to 0. The actual value is -1."
    );
}

#[test]
fn null_collection_is_not_empty_reports_null() {
    let col: Option<Vec<i32>> = None;
    let err = requires(&col, "col").is_not_empty().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentNull);
    assert!(err.is_argument_null());
    assert_eq!(err.name(), "col");
}

#[test]
fn collection_membership() {
    let col = vec![1, 2, 3];
    let v = requires(&col, "col");
    assert!(std::ptr::eq(v.contains(2).unwrap(), &v));

    let err = v.contains(9).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(err.message().contains('9'));
}

#[test]
fn null_result_fails_postcondition() {
    let result: Option<u32> = None;
    let err = ensures(&result, "result").is_not_null().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PostconditionFailed);
    assert!(err.is_postcondition());
    assert_eq!(err.message(), "Postcondition 'result should not be null' failed.");
}

#[test]
fn contains_any_needs_a_shared_element() {
    assert!(sequence::contains_any(Some(&[1, 2, 3]), Some(&[9, 2])));
    assert!(!sequence::contains_any(Some(&[1, 2, 3]), Some(&[9, 8])));
}

// ============================================================================
// CHAINING
// ============================================================================

#[test]
fn chain_stops_at_first_failure() {
    let calls = Cell::new(0);
    let count = |_: &i32| {
        calls.set(calls.get() + 1);
        true
    };

    let n = 5;
    let outcome = (|| -> Result<(), ConditionError> {
        requires(&n, "n")
            .evaluate_with(count)?
            .is_greater_than(10)?
            .evaluate_with(count)?;
        Ok(())
    })();

    let err = outcome.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentOutOfRange);
    assert_eq!(err.code(), "greater_than");
    assert_eq!(calls.get(), 1);
}

#[test]
fn mixed_families_chain_with_question_mark() -> Result<(), ConditionError> {
    let host = String::from("db.internal");
    let ports = vec![5432u16, 5433];
    let tls = true;

    requires(&host, "host")
        .is_not_null_or_white_space()?
        .is_shorter_or_equal(253)?
        .ends_with(".internal")?;
    requires(&ports, "ports")
        .is_not_empty()?
        .contains_all([5432u16])?
        .does_not_contain(0u16)?;
    requires(&tls, "tls").is_true()?;
    requires(&ports[0], "ports[0]").is_in_range(1u16, 65535u16)?;
    Ok(())
}

#[test]
fn macros_name_the_checked_expression() {
    let limit = 0u8;
    let err = requires!(limit).is_greater_than(0u8).unwrap_err();
    assert_eq!(err.name(), "limit");

    let retries = 7;
    let err = invariant!(retries, "retry budget").is_less_or_equal(3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvariantViolated);
    assert_eq!(
        err.message(),
        "Invariant 'retry budget should be less than or equal to 3' failed."
    );
}

#[test]
fn unnamed_values_use_the_default_name() {
    let err = requires_value(&None::<&str>).is_not_null().unwrap_err();
    assert_eq!(err.name(), "value");
    assert_eq!(err.message(), "value should not be null.");
}

#[test]
fn optional_numbers_order_null_first() {
    let missing: Option<i32> = None;
    assert!(requires(&missing, "n").is_less_than(Some(0)).is_ok());
    assert!(requires(&Some(3), "n").is_greater_than(None).is_ok());
}

#[test]
fn type_checks() {
    let value: u64 = 1;
    assert!(requires(&value, "value").is_of_type::<u64>().is_ok());
    let err = requires(&value, "value").is_of_type::<i64>().unwrap_err();
    assert!(err.message().contains("i64"));
    assert!(requires(&value, "value").is_not_of_type::<i64>().is_ok());
}
