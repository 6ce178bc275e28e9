//! Null checks on `Option` subjects

use std::fmt::Debug;

use crate::foundation::{Condition, FailurePolicy, Validator, Violation};

/// The subject is `Some`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotNull;

impl<T> Condition<Option<T>> for NotNull {
    fn check(&self, value: &Option<T>) -> Result<(), Violation> {
        match value {
            Some(_) => Ok(()),
            None => Err(Violation::null("not_null", "{0} should not be null")),
        }
    }
}

/// The subject is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsNull;

impl<T: Debug> Condition<Option<T>> for IsNull {
    fn check(&self, value: &Option<T>) -> Result<(), Violation> {
        match value {
            None => Ok(()),
            Some(present) => {
                Err(Violation::generic("null", "{0} should be null").with_actual(present))
            }
        }
    }
}

#[must_use]
pub const fn not_null() -> NotNull {
    NotNull
}

#[must_use]
pub const fn is_null() -> IsNull {
    IsNull
}

impl<T, P: FailurePolicy> Validator<'_, Option<T>, P> {
    /// # Errors
    ///
    /// Null violation when the value is `None`.
    pub fn is_not_null(&self) -> Result<&Self, P::Error> {
        self.satisfies(NotNull)
    }

    /// # Errors
    ///
    /// Generic violation naming the present value.
    pub fn is_null(&self) -> Result<&Self, P::Error>
    where
        T: Debug,
    {
        self.satisfies(IsNull)
    }
}
