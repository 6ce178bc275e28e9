//! Type checks
//!
//! The subject's static type is compared with the expected one. There is no
//! subtyping: a value matches exactly one concrete type.

use std::any::{TypeId, type_name};
use std::marker::PhantomData;

use crate::foundation::{Condition, FailurePolicy, Validator, Violation};

/// The subject is (or is not) of type `U`.
pub struct OfType<U: ?Sized> {
    negated: bool,
    _marker: PhantomData<fn() -> *const U>,
}

impl<U: ?Sized> OfType<U> {
    #[must_use]
    pub const fn new(negated: bool) -> Self {
        Self { negated, _marker: PhantomData }
    }
}

impl<U: ?Sized> std::fmt::Debug for OfType<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OfType")
            .field("type", &type_name::<U>())
            .field("negated", &self.negated)
            .finish()
    }
}

impl<U: ?Sized> Clone for OfType<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: ?Sized> Copy for OfType<U> {}

impl<T, U> Condition<T> for OfType<U>
where
    T: ?Sized + 'static,
    U: ?Sized + 'static,
{
    fn check(&self, _value: &T) -> Result<(), Violation> {
        if (TypeId::of::<T>() == TypeId::of::<U>()) != self.negated {
            return Ok(());
        }
        let (code, template) = if self.negated {
            ("not_of_type", "{0} should not be of type {1}")
        } else {
            ("of_type", "{0} should be of type {1}")
        };
        Err(Violation::generic(code, template).with_arg(type_name::<U>()))
    }
}

impl<T: ?Sized + 'static, P: FailurePolicy> Validator<'_, T, P> {
    /// # Errors
    ///
    /// Generic violation when the subject's type is not `U`.
    pub fn is_of_type<U: ?Sized + 'static>(&self) -> Result<&Self, P::Error> {
        self.satisfies(OfType::<U>::new(false))
    }

    pub fn is_not_of_type<U: ?Sized + 'static>(&self) -> Result<&Self, P::Error> {
        self.satisfies(OfType::<U>::new(true))
    }
}

#[cfg(test)]
mod tests {
    use crate::entry::requires;

    #[test]
    fn test_of_type() {
        assert!(requires(&1u8, "n").is_of_type::<u8>().is_ok());
        assert!(requires(&1u8, "n").is_not_of_type::<u16>().is_ok());
        assert!(requires("s", "s").is_of_type::<str>().is_ok());

        let err = requires(&1u8, "n").is_of_type::<i64>().unwrap_err();
        assert_eq!(err.message(), "n should be of type i64.");
        assert!(err.actual().is_none());
    }

    #[test]
    fn test_not_of_type() {
        let err = requires(&String::new(), "s").is_not_of_type::<String>().unwrap_err();
        assert_eq!(err.code(), "not_of_type");
    }
}
