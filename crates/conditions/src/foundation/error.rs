//! Error type raised by the built-in failure policies.
//!
//! All string fields use `Cow<'static, str>` where the common case is a
//! static argument name or error code.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Classification of a failed condition.
///
/// Callers that need to react to a specific failure class match on this
/// instead of parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// A precondition required a present value and got none.
    ArgumentNull,
    /// A precondition ordering constraint was violated.
    ArgumentOutOfRange,
    /// A precondition on an enumeration-typed argument was violated.
    InvalidEnumArgument,
    /// Any other precondition was violated.
    InvalidArgument,
    /// A postcondition was violated.
    PostconditionFailed,
    /// A class invariant was violated.
    InvariantViolated,
}

impl ErrorKind {
    /// Returns `true` for the argument classes raised by preconditions.
    #[must_use]
    pub const fn is_argument_error(self) -> bool {
        matches!(
            self,
            Self::ArgumentNull
                | Self::ArgumentOutOfRange
                | Self::InvalidEnumArgument
                | Self::InvalidArgument
        )
    }

    /// Stable snake-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArgumentNull => "argument_null",
            Self::ArgumentOutOfRange => "argument_out_of_range",
            Self::InvalidEnumArgument => "invalid_enum_argument",
            Self::InvalidArgument => "invalid_argument",
            Self::PostconditionFailed => "postcondition_failed",
            Self::InvariantViolated => "invariant_violated",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CONDITION ERROR
// ============================================================================

/// A failed condition, as raised by [`Requires`](crate::foundation::Requires),
/// [`Ensures`](crate::foundation::Ensures) and
/// [`Invariant`](crate::foundation::Invariant).
///
/// The message always names the argument and states the violated condition.
///
/// # Examples
///
/// ```
/// use nebula_conditions::prelude::*;
///
/// let err = requires(&-1, "x").is_greater_or_equal(0).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::ArgumentOutOfRange);
/// assert_eq!(err.name(), "x");
/// assert_eq!(
///     err.to_string(),
///     "x should be greater than or equal to 0. The actual value is -1."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ConditionError {
    kind: ErrorKind,
    name: Cow<'static, str>,
    code: Cow<'static, str>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    actual: Option<String>,
}

impl ConditionError {
    /// Creates a new error.
    pub fn new(
        kind: ErrorKind,
        name: impl Into<Cow<'static, str>>,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            code: code.into(),
            message: message.into(),
            actual: None,
        }
    }

    /// Attaches the rendering of the offending value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }

    /// Failure classification.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Logical name of the validated value.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Machine-readable code of the failed check, e.g. `"greater_than"`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Full human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Rendering of the offending value, when it had an informative one.
    #[must_use]
    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }

    /// Shorthand for `kind() == ErrorKind::ArgumentNull`.
    #[must_use]
    pub fn is_argument_null(&self) -> bool {
        self.kind == ErrorKind::ArgumentNull
    }

    /// Shorthand for `kind() == ErrorKind::ArgumentOutOfRange`.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        self.kind == ErrorKind::ArgumentOutOfRange
    }

    /// Shorthand for `kind() == ErrorKind::PostconditionFailed`.
    #[must_use]
    pub fn is_postcondition(&self) -> bool {
        self.kind == ErrorKind::PostconditionFailed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let err = ConditionError::new(
            ErrorKind::InvalidArgument,
            "name",
            "starts_with",
            "name should start with 'a'.",
        );
        assert_eq!(err.to_string(), "name should start with 'a'.");
        assert_eq!(err.code(), "starts_with");
        assert!(err.actual().is_none());
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let err = ConditionError::new(ErrorKind::ArgumentNull, "arg", "not_null", "");
        assert!(matches!(err.name, Cow::Borrowed(_)));
        assert!(matches!(err.code, Cow::Borrowed(_)));
    }

    #[test]
    fn test_kind_helpers() {
        assert!(ErrorKind::ArgumentNull.is_argument_error());
        assert!(ErrorKind::InvalidEnumArgument.is_argument_error());
        assert!(!ErrorKind::PostconditionFailed.is_argument_error());
        assert!(!ErrorKind::InvariantViolated.is_argument_error());
        assert_eq!(ErrorKind::ArgumentOutOfRange.to_string(), "argument_out_of_range");
    }

    #[test]
    fn test_serialize_skips_missing_actual() {
        let err = ConditionError::new(ErrorKind::PostconditionFailed, "result", "not_null", "m");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "postcondition_failed");
        assert!(json.get("actual").is_none());

        let json = serde_json::to_value(err.with_actual("None")).unwrap();
        assert_eq!(json["actual"], "None");
    }
}
