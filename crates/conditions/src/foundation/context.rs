//! The validation context carried through a chain of checks.

use std::borrow::Cow;
use std::fmt;

use crate::config;
use crate::foundation::condition::{Condition, Violation, ViolationKind};
use crate::foundation::policy::{Failure, FailurePolicy, Requires, ValidationMode};

/// A borrowed value, its logical name and the policy reporting its failures.
///
/// Checks take `&self` and return `Ok(self)` when they pass, so a chain is a
/// sequence of `?`-joined calls that stops at the first failure.
///
/// # Examples
///
/// ```
/// use nebula_conditions::prelude::*;
///
/// fn set_port(port: u16) -> Result<(), ConditionError> {
///     requires(&port, "port").is_greater_than(1023u16)?.is_not_equal_to(8080u16)?;
///     Ok(())
/// }
///
/// assert!(set_port(3000).is_ok());
/// assert!(set_port(80).is_err());
/// assert!(set_port(8080).is_err());
/// ```
pub struct Validator<'a, T: ?Sized, P = Requires> {
    value: &'a T,
    name: Cow<'static, str>,
    enumeration: bool,
    policy: P,
}

impl<'a, T: ?Sized, P: FailurePolicy> Validator<'a, T, P> {
    /// Creates a validator. A missing or empty name resolves to the
    /// configured default name.
    pub fn new(policy: P, value: &'a T, name: Option<Cow<'static, str>>) -> Self {
        let name = match name {
            Some(name) if !name.is_empty() => name,
            _ => Cow::Borrowed(config::current().default_name.as_str()),
        };
        Self {
            value,
            name,
            enumeration: false,
            policy,
        }
    }

    /// Marks the subject as an enumeration value.
    ///
    /// Every failure other than a null violation is then reported as
    /// [`ViolationKind::InvalidEnum`].
    #[must_use]
    pub fn as_enumeration(mut self) -> Self {
        self.enumeration = true;
        self
    }

    /// The value under test.
    #[must_use]
    pub fn value(&self) -> &'a T {
        self.value
    }

    /// Logical name used in failure messages.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn mode(&self) -> ValidationMode {
        self.policy.mode()
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    #[must_use]
    pub fn is_enumeration(&self) -> bool {
        self.enumeration
    }

    /// Evaluates `condition` against the value.
    ///
    /// # Errors
    ///
    /// Returns the policy's error when the condition does not hold.
    pub fn satisfies<C: Condition<T>>(&self, condition: C) -> Result<&Self, P::Error> {
        match condition.check(self.value) {
            Ok(()) => Ok(self),
            Err(violation) => Err(self.fail(violation)),
        }
    }

    /// Turns a violation into the policy's error.
    #[cold]
    pub fn fail(&self, violation: Violation) -> P::Error {
        let description = violation.describe(&self.name);
        let (kind, code, actual) = violation.into_parts();
        let kind = if self.enumeration && kind != ViolationKind::Null {
            ViolationKind::InvalidEnum
        } else {
            kind
        };

        tracing::debug!(
            argument = %self.name,
            code = %code,
            kind = ?kind,
            mode = %self.policy.mode(),
            "condition failed"
        );

        self.policy.build_error(Failure {
            name: self.name.clone(),
            kind,
            code,
            description,
            actual,
        })
    }
}

impl<T: ?Sized + fmt::Debug, P: fmt::Debug> fmt::Debug for Validator<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("value", &self.value)
            .field("name", &self.name)
            .field("enumeration", &self.enumeration)
            .field("policy", &self.policy)
            .finish()
    }
}

impl<T: ?Sized, P: Clone> Clone for Validator<'_, T, P> {
    fn clone(&self) -> Self {
        Self {
            value: self.value,
            name: self.name.clone(),
            enumeration: self.enumeration,
            policy: self.policy.clone(),
        }
    }
}
