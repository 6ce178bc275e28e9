//! Built-in check families.
//!
//! Ordering, equality, null, boolean, type and evaluation checks are inherent
//! methods on [`Validator`](crate::foundation::Validator). Text and collection
//! checks share method names (`is_empty`, `has_length`, `contains`, ...) and
//! live on the [`TextChecks`] and [`SequenceChecks`] traits instead.
//!
//! Each module also exposes its conditions as plain values, for use with
//! [`Validator::satisfies`](crate::foundation::Validator::satisfies) and the
//! [`combinators`](crate::combinators).

pub mod boolean;
pub mod collection;
pub mod evaluation;
pub mod null;
pub mod ordering;
pub mod text;
pub mod types;

pub use collection::SequenceChecks;
pub use evaluation::predicate;
pub use text::{Text, TextChecks};
