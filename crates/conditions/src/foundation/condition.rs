//! The check contract: conditions and the violations they report.

use std::borrow::Cow;
use std::fmt::Debug;

use smallvec::SmallVec;

use crate::foundation::message;

// ============================================================================
// CONDITION TRAIT
// ============================================================================

/// A predicate over a subject that describes itself when it does not hold.
///
/// Every check method on [`Validator`](crate::foundation::Validator) builds a
/// condition and hands it to [`Validator::satisfies`](crate::foundation::Validator::satisfies).
/// Custom checks implement this trait directly.
///
/// # Examples
///
/// ```
/// use nebula_conditions::foundation::{Condition, Violation};
/// use nebula_conditions::prelude::*;
///
/// struct Even;
///
/// impl Condition<u32> for Even {
///     fn check(&self, value: &u32) -> Result<(), Violation> {
///         if value % 2 == 0 {
///             Ok(())
///         } else {
///             Err(Violation::generic("even", "{0} should be even").with_actual(value))
///         }
///     }
/// }
///
/// assert!(requires(&4u32, "n").satisfies(Even).is_ok());
/// assert!(requires(&5u32, "n").satisfies(Even).is_err());
/// ```
pub trait Condition<T: ?Sized> {
    /// Evaluates the condition against `value`.
    fn check(&self, value: &T) -> Result<(), Violation>;
}

impl<T: ?Sized, C: Condition<T> + ?Sized> Condition<T> for &C {
    fn check(&self, value: &T) -> Result<(), Violation> {
        (**self).check(value)
    }
}

// ============================================================================
// VIOLATION
// ============================================================================

/// Nature of a violated condition. Selects the error class a policy raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// The subject was required to be present and was not.
    Null,
    /// The subject violated an ordering constraint.
    OutOfRange,
    /// The subject is an enumeration value outside its valid constraint.
    InvalidEnum,
    /// Any other predicate failure.
    Generic,
}

/// What a condition reports when it does not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    kind: ViolationKind,
    code: Cow<'static, str>,
    template: Cow<'static, str>,
    args: SmallVec<[String; 2]>,
    actual: Option<String>,
}

impl Violation {
    /// Creates a violation with an explicit kind.
    pub fn new(
        kind: ViolationKind,
        code: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            code: code.into(),
            template: template.into(),
            args: SmallVec::new(),
            actual: None,
        }
    }

    /// A [`ViolationKind::Generic`] violation.
    pub fn generic(
        code: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ViolationKind::Generic, code, template)
    }

    /// A [`ViolationKind::OutOfRange`] violation.
    pub fn out_of_range(
        code: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ViolationKind::OutOfRange, code, template)
    }

    /// A [`ViolationKind::Null`] violation.
    pub fn null(
        code: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ViolationKind::Null, code, template)
    }

    /// Appends a rendered argument; the first one fills `{1}`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends an argument rendered with its `Debug` form.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_debug_arg<V: Debug + ?Sized>(self, arg: &V) -> Self {
        self.with_arg(message::render(arg))
    }

    /// Attaches the offending value, subject to the configured rendering rules.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_actual<V: Debug + ?Sized>(mut self, value: &V) -> Self {
        self.actual = message::render_actual(value);
        self
    }

    /// Replaces the kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_kind(mut self, kind: ViolationKind) -> Self {
        self.kind = kind;
        self
    }

    /// Reports [`ViolationKind::Null`] when the subject is absent.
    #[must_use = "builder methods must be chained or built"]
    pub fn null_if(self, absent: bool) -> Self {
        if absent {
            self.with_kind(ViolationKind::Null)
        } else {
            self
        }
    }

    /// Replaces the description template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_template(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.template = template.into();
        self
    }

    /// Replaces the code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }

    /// Kind before the enumeration override.
    #[must_use]
    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// Stable machine-readable identifier of the failed check.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Description template, with `{0}` for the name.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Rendered arguments substituted for `{1}`, `{2}`, ...
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Rendering of the offending value, if attached.
    #[must_use]
    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }

    /// Renders the description for the argument called `name`.
    #[must_use]
    pub fn describe(&self, name: &str) -> String {
        message::describe(&self.template, name, &self.args)
    }

    pub(crate) fn into_parts(self) -> (ViolationKind, Cow<'static, str>, Option<String>) {
        (self.kind, self.code, self.actual)
    }
}
