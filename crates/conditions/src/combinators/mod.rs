//! Condition combinators.
//!
//! Only description overriding is provided: chaining checks on a validator
//! already is the conjunction, and the first failure ends the chain.

pub mod described;

pub use described::{ConditionExt, Described, described};
