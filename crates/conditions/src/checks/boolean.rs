//! Boolean checks

use crate::foundation::{FailurePolicy, Validator, Violation};

crate::condition! {
    /// The subject is `true`.
    pub IsTrue for bool;
    rule(input) { *input }
    violation(input) { Violation::generic("true", "{0} should be true").with_actual(input) }
    fn is_true();
}

crate::condition! {
    /// The subject is `false`.
    pub IsFalse for bool;
    rule(input) { !*input }
    violation(input) { Violation::generic("false", "{0} should be false").with_actual(input) }
    fn is_false();
}

impl<P: FailurePolicy> Validator<'_, bool, P> {
    pub fn is_true(&self) -> Result<&Self, P::Error> {
        self.satisfies(IsTrue)
    }

    pub fn is_false(&self) -> Result<&Self, P::Error> {
        self.satisfies(IsFalse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::requires;
    use crate::foundation::Condition;

    #[test]
    fn test_is_true() {
        assert!(is_true().check(&true).is_ok());
        assert!(requires(&true, "enabled").is_true().is_ok());
        let err = requires(&false, "enabled").is_true().unwrap_err();
        assert_eq!(err.message(), "enabled should be true. The actual value is false.");
    }

    #[test]
    fn test_is_false() {
        assert!(is_false().check(&false).is_ok());
        assert!(requires(&true, "dirty").is_false().is_err());
    }
}
