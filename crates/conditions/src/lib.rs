//! # nebula-conditions
//!
//! Fluent pre-, post- and invariant condition checks for the Nebula workflow engine.
//!
//! ## Quick Start
//!
//! ```
//! use nebula_conditions::prelude::*;
//!
//! fn connect(host: &str, port: u16, retries: &[u32]) -> Result<(), ConditionError> {
//!     requires(&host, "host").is_not_null_or_white_space()?;
//!     requires(&port, "port").is_in_range(1u16, 65535u16)?;
//!     requires(&retries, "retries").is_shorter_or_equal(5)?;
//!     Ok(())
//! }
//!
//! let err = connect("db", 0, &[]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ArgumentOutOfRange);
//! assert_eq!(
//!     err.message(),
//!     "port should be between 1 and 65535. The actual value is 0."
//! );
//! ```
//!
//! ## Failure Policies
//!
//! The entry point picks the contract: [`requires`] reports argument errors,
//! [`ensures`] reports postcondition failures, [`invariant`] reports invariant
//! violations, and [`validate_with`] accepts any
//! [`FailurePolicy`](foundation::FailurePolicy), including a closure-backed
//! [`OnFailure`](foundation::OnFailure) for callers with their own error type.
//!
//! ## Custom Conditions
//!
//! Use the [`condition!`] macro for zero-boilerplate conditions,
//! or implement [`Condition`](foundation::Condition) manually for complex cases.
//!
//! ## Built-in Checks
//!
//! - **Ordering**: [`is_in_range`](foundation::Validator::is_in_range),
//!   [`is_greater_than`](foundation::Validator::is_greater_than), ...
//! - **Null**: [`is_not_null`](foundation::Validator::is_not_null)
//! - **Text**: [`TextChecks`](checks::TextChecks)
//! - **Collections**: [`SequenceChecks`](checks::SequenceChecks)
//! - **Boolean**, **type** and **evaluation** checks on [`Validator`](foundation::Validator)

// ConditionError carries the name, code, message and actual value of a failure;
// boxing it would add an allocation to every failing check for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod checks;
pub mod combinators;
pub mod config;
mod entry;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod sequence;

pub use entry::{
    ensures, ensures_value, invariant, requires, requires_enum, requires_value, validate_with,
};
