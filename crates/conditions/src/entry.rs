//! Entry points: start a chain of checks on a value.

use std::borrow::Cow;

use crate::foundation::{Ensures, FailurePolicy, Invariant, Requires, Validator};

/// Starts a precondition chain on an argument.
///
/// ```
/// use nebula_conditions::prelude::*;
///
/// let err = requires(&-1, "x").is_greater_or_equal(0).unwrap_err();
/// assert!(err.is_out_of_range());
/// ```
pub fn requires<'a, T: ?Sized>(
    value: &'a T,
    name: impl Into<Cow<'static, str>>,
) -> Validator<'a, T> {
    Validator::new(Requires, value, Some(name.into()))
}

/// Starts a precondition chain named with the configured default name.
pub fn requires_value<T: ?Sized>(value: &T) -> Validator<'_, T> {
    Validator::new(Requires, value, None)
}

/// Starts a precondition chain on an enumeration value.
///
/// Failures other than null violations become
/// [`ErrorKind::InvalidEnumArgument`](crate::foundation::ErrorKind::InvalidEnumArgument).
pub fn requires_enum<'a, T: ?Sized>(
    value: &'a T,
    name: impl Into<Cow<'static, str>>,
) -> Validator<'a, T> {
    requires(value, name).as_enumeration()
}

/// Starts a postcondition chain on a result.
pub fn ensures<'a, T: ?Sized>(
    value: &'a T,
    name: impl Into<Cow<'static, str>>,
) -> Validator<'a, T, Ensures> {
    Validator::new(Ensures, value, Some(name.into()))
}

/// Starts a postcondition chain named with the configured default name.
pub fn ensures_value<T: ?Sized>(value: &T) -> Validator<'_, T, Ensures> {
    Validator::new(Ensures, value, None)
}

/// Starts an invariant chain on a piece of state.
pub fn invariant<'a, T: ?Sized>(
    value: &'a T,
    name: impl Into<Cow<'static, str>>,
) -> Validator<'a, T, Invariant> {
    Validator::new(Invariant, value, Some(name.into()))
}

/// Starts a chain reporting failures through `policy`.
pub fn validate_with<'a, T: ?Sized, P: FailurePolicy>(
    policy: P,
    value: &'a T,
    name: impl Into<Cow<'static, str>>,
) -> Validator<'a, T, P> {
    Validator::new(policy, value, Some(name.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationMode;

    #[test]
    fn test_modes() {
        assert_eq!(requires(&1, "a").mode(), ValidationMode::Precondition);
        assert_eq!(ensures(&1, "a").mode(), ValidationMode::Postcondition);
        assert_eq!(invariant(&1, "a").mode(), ValidationMode::Invariant);
        assert_eq!(validate_with(Ensures, &1, "a").mode(), ValidationMode::Postcondition);
    }

    #[test]
    fn test_default_names() {
        assert_eq!(requires_value(&1).name(), "value");
        assert_eq!(ensures_value(&1).name(), "value");
        assert_eq!(requires(&1, String::new()).name(), "value");
    }

    #[test]
    fn test_enum_entry() {
        assert!(requires_enum(&2u8, "level").is_enumeration());
        assert!(!requires(&2u8, "level").is_enumeration());
    }
}
