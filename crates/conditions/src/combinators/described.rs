//! DESCRIBED combinator - custom condition descriptions

use std::borrow::Cow;

use crate::foundation::{Condition, Violation};

// ============================================================================
// DESCRIBED COMBINATOR
// ============================================================================

/// Replaces the description of a condition.
///
/// The template keeps the placeholder rules of the built-in descriptions:
/// `{0}` is the argument name and `{1}`, `{2}`, ... are the condition's own
/// arguments. A malformed template is used verbatim.
///
/// # Examples
///
/// ```
/// use nebula_conditions::combinators::described;
/// use nebula_conditions::checks::ordering::greater_than;
/// use nebula_conditions::prelude::*;
///
/// let err = requires(&0, "retries")
///     .satisfies(described(greater_than(0), "{0} must allow at least one attempt above {1}"))
///     .unwrap_err();
/// assert!(err.message().starts_with("retries must allow at least one attempt above 0."));
/// ```
#[derive(Debug, Clone)]
pub struct Described<C> {
    inner: C,
    template: Cow<'static, str>,
    code: Option<Cow<'static, str>>,
}

impl<C> Described<C> {
    /// Wraps `inner`, describing its violations with `template`.
    pub fn new(inner: C, template: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            template: template.into(),
            code: None,
        }
    }

    /// Also replaces the violation code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns a reference to the inner condition.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Extracts the inner condition.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T, C> Condition<T> for Described<C>
where
    T: ?Sized,
    C: Condition<T>,
{
    fn check(&self, value: &T) -> Result<(), Violation> {
        self.inner.check(value).map_err(|original| {
            let violation = original.with_template(self.template.clone());
            match &self.code {
                Some(code) => violation.with_code(code.clone()),
                None => violation,
            }
        })
    }
}

/// Creates a [`Described`] combinator.
pub fn described<C>(condition: C, template: impl Into<Cow<'static, str>>) -> Described<C> {
    Described::new(condition, template)
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Method form of the combinators, available on every value.
pub trait ConditionExt: Sized {
    /// See [`described`].
    fn described(self, template: impl Into<Cow<'static, str>>) -> Described<Self> {
        Described::new(self, template)
    }
}

impl<C> ConditionExt for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ViolationKind;

    struct NonZero;

    impl Condition<i64> for NonZero {
        fn check(&self, value: &i64) -> Result<(), Violation> {
            if *value == 0 {
                Err(Violation::generic("non_zero", "{0} should not be zero").with_actual(value))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_replaces_template_only() {
        let err = described(NonZero, "{0} is a divisor").check(&0).unwrap_err();
        assert_eq!(err.template(), "{0} is a divisor");
        assert_eq!(err.code(), "non_zero");
        assert_eq!(err.kind(), ViolationKind::Generic);
        assert_eq!(err.actual(), Some("0"));
    }

    #[test]
    fn test_with_code() {
        let condition = NonZero.described("{0} is a divisor").with_code("divisor");
        assert_eq!(condition.code(), Some("divisor"));
        let err = condition.check(&0).unwrap_err();
        assert_eq!(err.code(), "divisor");
    }

    #[test]
    fn test_passing_condition_untouched() {
        assert!(described(NonZero, "ignored").check(&3).is_ok());
    }

    #[test]
    fn test_accessors() {
        let condition = described(NonZero, "{0} is a divisor");
        assert_eq!(condition.template(), "{0} is a divisor");
        assert!(condition.code().is_none());
        let _inner: &NonZero = condition.inner();
        let _inner: NonZero = condition.into_inner();
    }
}
