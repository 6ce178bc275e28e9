//! Failure reporting policies.
//!
//! A policy decides which error a failed condition becomes. The built-in
//! policies map every failure onto [`ConditionError`]; [`OnFailure`] lets a
//! caller plug in its own error type.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::foundation::condition::ViolationKind;
use crate::foundation::error::{ConditionError, ErrorKind};

// ============================================================================
// VALIDATION MODE
// ============================================================================

/// The contract a chain of checks enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ValidationMode {
    /// Caller-supplied arguments.
    Precondition,
    /// Results produced by the callee.
    Postcondition,
    /// State that must hold between operations.
    Invariant,
}

impl ValidationMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Precondition => "precondition",
            Self::Postcondition => "postcondition",
            Self::Invariant => "invariant",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FAILURE
// ============================================================================

/// Everything a policy needs to build its error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Failure {
    /// Logical name of the validated value.
    pub name: Cow<'static, str>,
    /// Kind after the enumeration override.
    pub kind: ViolationKind,
    /// Code of the failed check.
    pub code: Cow<'static, str>,
    /// Rendered condition description, without a trailing period.
    pub description: String,
    /// Rendering of the offending value, if the check attached one.
    pub actual: Option<String>,
}

impl Failure {
    /// `"<description>."` followed by the actual-value clause when present.
    #[must_use]
    pub fn message(&self) -> String {
        let mut message = format!("{}.", self.description.trim_end_matches('.'));
        self.push_actual(&mut message);
        message
    }

    fn push_actual(&self, message: &mut String) {
        if let Some(actual) = &self.actual {
            message.push_str(" The actual value is ");
            message.push_str(actual);
            message.push('.');
        }
    }

    fn into_error(self, kind: ErrorKind, message: String) -> ConditionError {
        let error = ConditionError::new(kind, self.name, self.code, message);
        match self.actual {
            Some(actual) => error.with_actual(actual),
            None => error,
        }
    }
}

// ============================================================================
// POLICY TRAIT
// ============================================================================

/// Strategy that turns a [`Failure`] into the error a check returns.
pub trait FailurePolicy {
    /// Error returned by failing checks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Mode reported in logs and errors.
    fn mode(&self) -> ValidationMode;

    /// Builds the error for a failed condition.
    fn build_error(&self, failure: Failure) -> Self::Error;
}

impl<P: FailurePolicy + ?Sized> FailurePolicy for &P {
    type Error = P::Error;

    fn mode(&self) -> ValidationMode {
        (**self).mode()
    }

    fn build_error(&self, failure: Failure) -> Self::Error {
        (**self).build_error(failure)
    }
}

// ============================================================================
// BUILT-IN POLICIES
// ============================================================================

/// Precondition policy: one argument error class per violation kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Requires;

impl FailurePolicy for Requires {
    type Error = ConditionError;

    fn mode(&self) -> ValidationMode {
        ValidationMode::Precondition
    }

    fn build_error(&self, failure: Failure) -> ConditionError {
        let kind = match failure.kind {
            ViolationKind::Null => ErrorKind::ArgumentNull,
            ViolationKind::OutOfRange => ErrorKind::ArgumentOutOfRange,
            ViolationKind::InvalidEnum => ErrorKind::InvalidEnumArgument,
            ViolationKind::Generic => ErrorKind::InvalidArgument,
        };
        let message = failure.message();
        failure.into_error(kind, message)
    }
}

/// Postcondition policy: every violation is a [`ErrorKind::PostconditionFailed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ensures;

impl FailurePolicy for Ensures {
    type Error = ConditionError;

    fn mode(&self) -> ValidationMode {
        ValidationMode::Postcondition
    }

    fn build_error(&self, failure: Failure) -> ConditionError {
        let mut message = format!(
            "Postcondition '{}' failed.",
            failure.description.trim_end_matches('.')
        );
        failure.push_actual(&mut message);
        failure.into_error(ErrorKind::PostconditionFailed, message)
    }
}

/// Invariant policy: every violation is an [`ErrorKind::InvariantViolated`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invariant;

impl FailurePolicy for Invariant {
    type Error = ConditionError;

    fn mode(&self) -> ValidationMode {
        ValidationMode::Invariant
    }

    fn build_error(&self, failure: Failure) -> ConditionError {
        let message = format!(
            "Invariant '{}' failed.",
            failure.description.trim_end_matches('.')
        );
        failure.into_error(ErrorKind::InvariantViolated, message)
    }
}

/// Policy backed by a closure, for callers with their own error type.
///
/// # Examples
///
/// ```
/// use nebula_conditions::foundation::{Failure, OnFailure, ValidationMode};
/// use nebula_conditions::validate_with;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("bad request: {0}")]
/// struct BadRequest(String);
///
/// let policy = OnFailure::new(ValidationMode::Precondition, |f: Failure| {
///     BadRequest(f.message())
/// });
/// let err = validate_with(policy, &0u16, "port").is_greater_than(0u16).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "bad request: port should be greater than 0. The actual value is 0."
/// );
/// ```
#[derive(Clone)]
pub struct OnFailure<F> {
    mode: ValidationMode,
    build: F,
}

impl<F> OnFailure<F> {
    /// Creates a policy reporting `mode` and building errors with `build`.
    pub fn new(mode: ValidationMode, build: F) -> Self {
        Self { mode, build }
    }
}

impl<F> fmt::Debug for OnFailure<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnFailure")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl<F, E> FailurePolicy for OnFailure<F>
where
    F: Fn(Failure) -> E,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn mode(&self) -> ValidationMode {
        self.mode
    }

    fn build_error(&self, failure: Failure) -> E {
        (self.build)(failure)
    }
}
