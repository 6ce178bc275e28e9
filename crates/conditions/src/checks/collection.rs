//! Collection checks
//!
//! Subjects are anything implementing [`Sequence`]. A null sequence (`None`)
//! counts as empty, and any check it fails reports a null violation. Failure
//! messages name the expected elements but never render the collection.

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

use crate::foundation::message::render_list;
use crate::foundation::{Condition, FailurePolicy, Validator, Violation};
use crate::sequence::{self, LengthRule, Sequence};

// ============================================================================
// CONDITIONS
// ============================================================================

/// No elements. A null sequence passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Empty;

impl<Q: Sequence + ?Sized> Condition<Q> for Empty {
    fn check(&self, value: &Q) -> Result<(), Violation> {
        if sequence::is_empty(value.items()) {
            Ok(())
        } else {
            Err(Violation::generic("empty", "{0} should be empty"))
        }
    }
}

/// At least one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotEmpty;

impl<Q: Sequence + ?Sized> Condition<Q> for NotEmpty {
    fn check(&self, value: &Q) -> Result<(), Violation> {
        let items = value.items();
        let absent = items.is_none();
        if sequence::is_empty(items) {
            Err(Violation::generic("not_empty", "{0} should not be empty").null_if(absent))
        } else {
            Ok(())
        }
    }
}

/// Element count constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Length(pub LengthRule);

impl<Q: Sequence + ?Sized> Condition<Q> for Length {
    fn check(&self, value: &Q) -> Result<(), Violation> {
        let items = value.items();
        let absent = items.is_none();
        if self.0.admits(sequence::count_up_to(items, self.0.limit())) {
            Ok(())
        } else {
            Err(self.0.violation().null_if(absent))
        }
    }
}

/// Membership of a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contains<E> {
    pub element: E,
    pub negated: bool,
}

impl<Q, E> Condition<Q> for Contains<E>
where
    Q: Sequence + ?Sized,
    Q::Item: PartialEq,
    E: Borrow<Q::Item> + Debug,
{
    fn check(&self, value: &Q) -> Result<(), Violation> {
        if value.find(<E as Borrow<Q::Item>>::borrow(&self.element)) != self.negated {
            return Ok(());
        }
        let (code, template) = if self.negated {
            ("not_contains", "{0} should not contain {1}")
        } else {
            ("contains", "{0} should contain {1}")
        };
        Err(Violation::generic(code, template)
            .with_debug_arg(&self.element)
            .null_if(value.items().is_none()))
    }
}

/// Shares at least one element with the candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsAny<E> {
    pub candidates: Vec<E>,
    pub negated: bool,
}

impl<Q, E> Condition<Q> for ContainsAny<E>
where
    Q: Sequence + ?Sized,
    Q::Item: Hash + Eq,
    E: Borrow<Q::Item> + Debug,
{
    fn check(&self, value: &Q) -> Result<(), Violation> {
        let found = if value.is_indexed() {
            self.candidates.iter().any(|c| value.find(<E as Borrow<Q::Item>>::borrow(c)))
        } else {
            sequence::contains_any(
                value.items(),
                Some(self.candidates.iter().map(<E as Borrow<Q::Item>>::borrow)),
            )
        };
        if found != self.negated {
            return Ok(());
        }
        let (code, template) = if self.negated {
            (
                "not_contains_any",
                "{0} should not contain any of the following values: {1}",
            )
        } else {
            (
                "contains_any",
                "{0} should contain at least one of the following values: {1}",
            )
        };
        Err(Violation::generic(code, template)
            .with_arg(render_list(&self.candidates))
            .null_if(value.items().is_none()))
    }
}

/// Contains every candidate. Vacuously true for no candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsAll<E> {
    pub candidates: Vec<E>,
    pub negated: bool,
}

impl<Q, E> Condition<Q> for ContainsAll<E>
where
    Q: Sequence + ?Sized,
    Q::Item: Hash + Eq,
    E: Borrow<Q::Item> + Debug,
{
    fn check(&self, value: &Q) -> Result<(), Violation> {
        let found = if value.is_indexed() {
            self.candidates.iter().all(|c| value.find(<E as Borrow<Q::Item>>::borrow(c)))
        } else {
            sequence::contains_all(
                value.items(),
                Some(self.candidates.iter().map(<E as Borrow<Q::Item>>::borrow)),
            )
        };
        if found != self.negated {
            return Ok(());
        }
        let (code, template) = if self.negated {
            (
                "not_contains_all",
                "{0} should not contain all of the following values: {1}",
            )
        } else {
            (
                "contains_all",
                "{0} should contain all of the following values: {1}",
            )
        };
        Err(Violation::generic(code, template)
            .with_arg(render_list(&self.candidates))
            .null_if(value.items().is_none()))
    }
}

// ============================================================================
// VALIDATOR METHODS
// ============================================================================

/// Collection checks on a [`Validator`] whose subject implements [`Sequence`].
pub trait SequenceChecks {
    type Item;
    type Error;

    /// No elements; a null sequence passes.
    fn is_empty(&self) -> Result<&Self, Self::Error>;
    /// At least one element; a null sequence fails with a null violation.
    fn is_not_empty(&self) -> Result<&Self, Self::Error>;

    fn has_length(&self, n: usize) -> Result<&Self, Self::Error>;
    fn does_not_have_length(&self, n: usize) -> Result<&Self, Self::Error>;
    fn is_shorter_than(&self, n: usize) -> Result<&Self, Self::Error>;
    fn is_not_shorter_than(&self, n: usize) -> Result<&Self, Self::Error>;
    fn is_shorter_or_equal(&self, n: usize) -> Result<&Self, Self::Error>;
    fn is_not_shorter_or_equal(&self, n: usize) -> Result<&Self, Self::Error>;
    fn is_longer_than(&self, n: usize) -> Result<&Self, Self::Error>;
    fn is_not_longer_than(&self, n: usize) -> Result<&Self, Self::Error>;
    fn is_longer_or_equal(&self, n: usize) -> Result<&Self, Self::Error>;
    fn is_not_longer_or_equal(&self, n: usize) -> Result<&Self, Self::Error>;

    fn contains<E>(&self, element: E) -> Result<&Self, Self::Error>
    where
        E: Borrow<Self::Item> + Debug,
        Self::Item: PartialEq;

    fn does_not_contain<E>(&self, element: E) -> Result<&Self, Self::Error>
    where
        E: Borrow<Self::Item> + Debug,
        Self::Item: PartialEq;

    /// At least one candidate is an element. Fails for no candidates.
    fn contains_any<I>(&self, candidates: I) -> Result<&Self, Self::Error>
    where
        I: IntoIterator,
        I::Item: Borrow<Self::Item> + Debug,
        Self::Item: Hash + Eq;

    fn does_not_contain_any<I>(&self, candidates: I) -> Result<&Self, Self::Error>
    where
        I: IntoIterator,
        I::Item: Borrow<Self::Item> + Debug,
        Self::Item: Hash + Eq;

    /// Every candidate is an element. Passes for no candidates.
    fn contains_all<I>(&self, candidates: I) -> Result<&Self, Self::Error>
    where
        I: IntoIterator,
        I::Item: Borrow<Self::Item> + Debug,
        Self::Item: Hash + Eq;

    fn does_not_contain_all<I>(&self, candidates: I) -> Result<&Self, Self::Error>
    where
        I: IntoIterator,
        I::Item: Borrow<Self::Item> + Debug,
        Self::Item: Hash + Eq;
}

impl<Q: Sequence + ?Sized, P: FailurePolicy> SequenceChecks for Validator<'_, Q, P> {
    type Item = Q::Item;
    type Error = P::Error;

    fn is_empty(&self) -> Result<&Self, P::Error> {
        self.satisfies(Empty)
    }

    fn is_not_empty(&self) -> Result<&Self, P::Error> {
        self.satisfies(NotEmpty)
    }

    fn has_length(&self, n: usize) -> Result<&Self, P::Error> {
        self.satisfies(Length(LengthRule::Exactly(n)))
    }

    fn does_not_have_length(&self, n: usize) -> Result<&Self, P::Error> {
        self.satisfies(Length(LengthRule::NotExactly(n)))
    }

    fn is_shorter_than(&self, n: usize) -> Result<&Self, P::Error> {
        self.satisfies(Length(LengthRule::ShorterThan(n)))
    }

    fn is_not_shorter_than(&self, n: usize) -> Result<&Self, P::Error> {
        self.satisfies(Length(LengthRule::NotShorterThan(n)))
    }

    fn is_shorter_or_equal(&self, n: usize) -> Result<&Self, P::Error> {
        self.satisfies(Length(LengthRule::ShorterOrEqual(n)))
    }

    fn is_not_shorter_or_equal(&self, n: usize) -> Result<&Self, P::Error> {
        self.satisfies(Length(LengthRule::NotShorterOrEqual(n)))
    }

    fn is_longer_than(&self, n: usize) -> Result<&Self, P::Error> {
        self.satisfies(Length(LengthRule::LongerThan(n)))
    }

    fn is_not_longer_than(&self, n: usize) -> Result<&Self, P::Error> {
        self.satisfies(Length(LengthRule::NotLongerThan(n)))
    }

    fn is_longer_or_equal(&self, n: usize) -> Result<&Self, P::Error> {
        self.satisfies(Length(LengthRule::LongerOrEqual(n)))
    }

    fn is_not_longer_or_equal(&self, n: usize) -> Result<&Self, P::Error> {
        self.satisfies(Length(LengthRule::NotLongerOrEqual(n)))
    }

    fn contains<E>(&self, element: E) -> Result<&Self, P::Error>
    where
        E: Borrow<Q::Item> + Debug,
        Q::Item: PartialEq,
    {
        self.satisfies(Contains { element, negated: false })
    }

    fn does_not_contain<E>(&self, element: E) -> Result<&Self, P::Error>
    where
        E: Borrow<Q::Item> + Debug,
        Q::Item: PartialEq,
    {
        self.satisfies(Contains { element, negated: true })
    }

    fn contains_any<I>(&self, candidates: I) -> Result<&Self, P::Error>
    where
        I: IntoIterator,
        I::Item: Borrow<Q::Item> + Debug,
        Q::Item: Hash + Eq,
    {
        self.satisfies(ContainsAny {
            candidates: candidates.into_iter().collect(),
            negated: false,
        })
    }

    fn does_not_contain_any<I>(&self, candidates: I) -> Result<&Self, P::Error>
    where
        I: IntoIterator,
        I::Item: Borrow<Q::Item> + Debug,
        Q::Item: Hash + Eq,
    {
        self.satisfies(ContainsAny {
            candidates: candidates.into_iter().collect(),
            negated: true,
        })
    }

    fn contains_all<I>(&self, candidates: I) -> Result<&Self, P::Error>
    where
        I: IntoIterator,
        I::Item: Borrow<Q::Item> + Debug,
        Q::Item: Hash + Eq,
    {
        self.satisfies(ContainsAll {
            candidates: candidates.into_iter().collect(),
            negated: false,
        })
    }

    fn does_not_contain_all<I>(&self, candidates: I) -> Result<&Self, P::Error>
    where
        I: IntoIterator,
        I::Item: Borrow<Q::Item> + Debug,
        Q::Item: Hash + Eq,
    {
        self.satisfies(ContainsAll {
            candidates: candidates.into_iter().collect(),
            negated: true,
        })
    }
}
