//! Ad-hoc conditions: a precomputed outcome or a predicate over the value.
//!
//! Neither can describe itself beyond "should satisfy the condition"; wrap
//! them in [`described`](crate::combinators::described) for a better message.

use crate::foundation::{Condition, FailurePolicy, Validator, Violation};

const CODE: &str = "evaluate";
const TEMPLATE: &str = "{0} should satisfy the condition";

/// A condition whose outcome was computed by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluated(pub bool);

impl<T: ?Sized> Condition<T> for Evaluated {
    fn check(&self, _value: &T) -> Result<(), Violation> {
        if self.0 {
            Ok(())
        } else {
            Err(Violation::generic(CODE, TEMPLATE))
        }
    }
}

/// A condition backed by a closure over the value.
#[derive(Clone, Copy)]
pub struct Predicate<F>(pub F);

impl<F> std::fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Predicate")
    }
}

impl<T: ?Sized, F: Fn(&T) -> bool> Condition<T> for Predicate<F> {
    fn check(&self, value: &T) -> Result<(), Violation> {
        if (self.0)(value) {
            Ok(())
        } else {
            Err(Violation::generic(CODE, TEMPLATE))
        }
    }
}

pub fn predicate<T: ?Sized, F: Fn(&T) -> bool>(f: F) -> Predicate<F> {
    Predicate(f)
}

impl<T: ?Sized, P: FailurePolicy> Validator<'_, T, P> {
    /// Fails when `outcome` is `false`.
    pub fn evaluate(&self, outcome: bool) -> Result<&Self, P::Error> {
        self.satisfies(Evaluated(outcome))
    }

    /// Fails when `predicate` returns `false` for the value.
    pub fn evaluate_with<F: Fn(&T) -> bool>(&self, predicate: F) -> Result<&Self, P::Error> {
        self.satisfies(Predicate(predicate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::described;
    use crate::entry::requires;
    use crate::foundation::ErrorKind;

    #[test]
    fn test_evaluate() {
        assert!(requires(&3, "n").evaluate(true).is_ok());
        let err = requires(&3, "n").evaluate(false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.message(), "n should satisfy the condition.");
    }

    #[test]
    fn test_evaluate_with() {
        let n = 7;
        assert!(requires(&n, "n").evaluate_with(|v| v % 7 == 0).is_ok());
        assert!(requires(&n, "n").evaluate_with(|v| v % 2 == 0).is_err());
    }

    #[test]
    fn test_described_predicate() {
        let err = requires(&7, "n")
            .satisfies(described(predicate(|v: &i32| v % 2 == 0), "{0} should be even"))
            .unwrap_err();
        assert_eq!(err.message(), "n should be even.");
    }
}
