//! Prelude module for convenient imports.
//!
//! Provides a single `use nebula_conditions::prelude::*;` import that brings
//! in the entry points, the check extension traits, and the error types.
//!
//! # Examples
//!
//! ```
//! use nebula_conditions::prelude::*;
//!
//! let name = "alice";
//! let tags = vec!["admin"];
//! requires(&name, "name").is_not_null_or_white_space()?.is_shorter_or_equal(20)?;
//! requires(&tags, "tags").is_not_empty()?.contains(&"admin")?;
//! # Ok::<(), ConditionError>(())
//! ```

// ============================================================================
// ENTRY POINTS: Functions and their `stringify!` macro twins
// ============================================================================

pub use crate::{
    ensures, ensures_value, invariant, requires, requires_enum, requires_value, validate_with,
};

// ============================================================================
// FOUNDATION: Context, conditions, policies, errors
// ============================================================================

pub use crate::foundation::{
    CheckResult, Condition, ConditionError, Ensures, ErrorKind, Failure, FailurePolicy, Invariant,
    OnFailure, Requires, ValidationMode, Validator, Violation, ViolationKind,
};

// ============================================================================
// CHECKS: Extension traits and subject abstractions
// ============================================================================

pub use crate::checks::{SequenceChecks, Text, TextChecks, predicate};
pub use crate::sequence::Sequence;

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{ConditionExt, Described, described};
