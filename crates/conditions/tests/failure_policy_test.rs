use nebula_conditions::foundation::{Failure, OnFailure, ValidationMode};
use nebula_conditions::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Level {
    Low,
    Mid,
    High,
}

#[rstest]
#[case(ensures(&-1, "n").mode(), ValidationMode::Postcondition)]
#[case(requires(&-1, "n").mode(), ValidationMode::Precondition)]
#[case(invariant(&-1, "n").mode(), ValidationMode::Invariant)]
fn test_entry_point_selects_mode(#[case] actual: ValidationMode, #[case] expected: ValidationMode) {
    assert_eq!(actual, expected);
}

#[test]
fn test_postconditions_are_unified() {
    let result = vec![1, 2];
    let err = ensures(&result, "result").has_length(3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PostconditionFailed);
    assert_eq!(err.message(), "Postcondition 'result should have a length of 3' failed.");

    let err = ensures(&-5, "result").is_greater_than(0).unwrap_err();
    assert_eq!(
        err.message(),
        "Postcondition 'result should be greater than 0' failed. The actual value is -5."
    );
}

#[test]
fn test_enum_override() {
    let err = requires_enum(&Level::High, "level")
        .is_less_than(Level::Mid)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidEnumArgument);
    assert_eq!(
        err.message(),
        "level should be less than Mid. The actual value is High."
    );

    let err = requires_enum(&Level::Low, "level")
        .is_equal_to(Level::High)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidEnumArgument);
}

#[test]
fn test_enum_override_keeps_null() {
    let missing: Option<Level> = None;
    let err = requires_enum(&missing, "level").is_not_null().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentNull);

    let err = requires(&Level::Low, "level")
        .as_enumeration()
        .is_greater_or_equal(Level::Mid)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidEnumArgument);
}

#[test]
fn test_enum_override_does_not_touch_postconditions() {
    let err = ensures(&Level::Low, "level")
        .as_enumeration()
        .is_equal_to(Level::High)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PostconditionFailed);
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{code}: {message}")]
struct ApiError {
    code: String,
    message: String,
}

#[test]
fn test_on_failure_builds_caller_errors() {
    let policy = OnFailure::new(ValidationMode::Precondition, |f: Failure| ApiError {
        message: f.message(),
        code: f.code.into_owned(),
    });

    let name = "";
    let err = validate_with(&policy, &name, "name")
        .is_not_null_or_empty()
        .unwrap_err();
    assert_eq!(
        err,
        ApiError {
            code: "not_null_or_empty".to_string(),
            message: "name should not be null or empty. The actual value is \"\".".to_string(),
        }
    );

    let bob = validate_with(&policy, &"bob", "name");
    assert!(bob.is_longer_than(2).is_ok());
}

#[test]
fn test_described_conditions() {
    let even = described(predicate(|n: &u32| n % 2 == 0), "{0} should be even");
    let err = requires(&3u32, "count").satisfies(&even).unwrap_err();
    assert_eq!(err.message(), "count should be even.");
    assert_eq!(err.code(), "evaluate");

    let err = requires(&3u32, "count")
        .satisfies(
            nebula_conditions::checks::ordering::greater_than(5u32)
                .described("{0} should exceed {1} workers")
                .with_code("too_few_workers"),
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentOutOfRange);
    assert_eq!(err.code(), "too_few_workers");
    assert_eq!(
        err.message(),
        "count should exceed 5 workers. The actual value is 3."
    );
}

#[test]
fn test_custom_condition() {
    nebula_conditions::condition! {
        /// Port outside the privileged range.
        Unprivileged for u16;
        rule(input) { *input >= 1024 }
        violation(input) {
            Violation::out_of_range("unprivileged", "{0} should not be a privileged port")
                .with_actual(input)
        }
        fn unprivileged();
    }

    assert!(requires(&8080u16, "port").satisfies(unprivileged()).is_ok());
    let err = requires(&80u16, "port").satisfies(Unprivileged).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentOutOfRange);
    assert_eq!(
        err.message(),
        "port should not be a privileged port. The actual value is 80."
    );
}

#[test]
fn test_error_serializes_for_structured_logs() {
    let err = requires(&-1, "x").is_greater_or_equal(0).unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["kind"], "argument_out_of_range");
    assert_eq!(json["name"], "x");
    assert_eq!(json["code"], "greater_or_equal");
    assert_eq!(json["actual"], "-1");
}
