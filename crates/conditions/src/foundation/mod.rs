//! Core types of the condition system.
//!
//! - **Context**: [`Validator`] carries a borrowed value, its name and a policy
//! - **Conditions**: [`Condition`] evaluates a value and reports a [`Violation`]
//! - **Policies**: [`FailurePolicy`] turns a violation into the returned error
//! - **Errors**: [`ConditionError`] and its [`ErrorKind`]
//!
//! # Failure path
//!
//! A failing condition produces a [`Violation`]. The validator applies the
//! enumeration override, renders the description with the argument name,
//! emits a `tracing` debug event and hands a [`Failure`] to its policy.
//!
//! ```
//! use nebula_conditions::prelude::*;
//!
//! let err = ensures(&None::<u8>, "result").is_not_null().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::PostconditionFailed);
//! assert_eq!(err.message(), "Postcondition 'result should not be null' failed.");
//! ```

pub mod compare;
pub mod condition;
pub mod context;
pub mod error;
pub mod message;
pub mod policy;

pub use condition::{Condition, Violation, ViolationKind};
pub use context::Validator;
pub use error::{ConditionError, ErrorKind};
pub use message::TemplateError;
pub use policy::{Ensures, Failure, FailurePolicy, Invariant, OnFailure, Requires, ValidationMode};

/// Result of a check on a [`Validator`].
pub type CheckResult<'v, 'a, T, P = Requires> =
    Result<&'v Validator<'a, T, P>, <P as FailurePolicy>::Error>;
