//! Ordering and equality checks
//!
//! Generic over `T: PartialOrd<B>`, so any comparable subject works with any
//! bound it can be compared against: integers, floats, strings, `Option<N>`
//! (where `None` sorts first). An incomparable pair fails every ordering check.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::foundation::compare::{compare_partial, is_within};
use crate::foundation::{Condition, FailurePolicy, Validator, Violation};

// ============================================================================
// ORDER RULES
// ============================================================================

/// Relation between a subject and a single bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderRule {
    GreaterThan,
    NotGreaterThan,
    GreaterOrEqual,
    NotGreaterOrEqual,
    LessThan,
    NotLessThan,
    LessOrEqual,
    NotLessOrEqual,
}

impl OrderRule {
    /// Whether the comparison outcome satisfies the rule.
    #[must_use]
    pub const fn admits(self, ordering: Option<Ordering>) -> bool {
        let Some(ordering) = ordering else {
            return false;
        };
        match self {
            Self::GreaterThan | Self::NotLessOrEqual => ordering.is_gt(),
            Self::NotGreaterThan | Self::LessOrEqual => ordering.is_le(),
            Self::GreaterOrEqual | Self::NotLessThan => ordering.is_ge(),
            Self::NotGreaterOrEqual | Self::LessThan => ordering.is_lt(),
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::GreaterThan => "greater_than",
            Self::NotGreaterThan => "not_greater_than",
            Self::GreaterOrEqual => "greater_or_equal",
            Self::NotGreaterOrEqual => "not_greater_or_equal",
            Self::LessThan => "less_than",
            Self::NotLessThan => "not_less_than",
            Self::LessOrEqual => "less_or_equal",
            Self::NotLessOrEqual => "not_less_or_equal",
        }
    }

    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::GreaterThan => "{0} should be greater than {1}",
            Self::NotGreaterThan => "{0} should not be greater than {1}",
            Self::GreaterOrEqual => "{0} should be greater than or equal to {1}",
            Self::NotGreaterOrEqual => "{0} should not be greater than or equal to {1}",
            Self::LessThan => "{0} should be less than {1}",
            Self::NotLessThan => "{0} should not be less than {1}",
            Self::LessOrEqual => "{0} should be less than or equal to {1}",
            Self::NotLessOrEqual => "{0} should not be less than or equal to {1}",
        }
    }
}

// ============================================================================
// CONDITIONS
// ============================================================================

/// The subject compared against one bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound<B> {
    pub rule: OrderRule,
    pub bound: B,
}

impl<T, B> Condition<T> for Bound<B>
where
    T: PartialOrd<B> + Debug + ?Sized,
    B: Debug,
{
    fn check(&self, value: &T) -> Result<(), Violation> {
        if self.rule.admits(compare_partial(value, &self.bound)) {
            return Ok(());
        }
        Err(Violation::out_of_range(self.rule.code(), self.rule.template())
            .with_debug_arg(&self.bound)
            .with_actual(value))
    }
}

/// The subject within (or outside) the closed range `min..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InRange<B> {
    pub min: B,
    pub max: B,
    pub negated: bool,
}

impl<T, B> Condition<T> for InRange<B>
where
    T: PartialOrd<B> + Debug + ?Sized,
    B: Debug,
{
    fn check(&self, value: &T) -> Result<(), Violation> {
        let within = is_within(value, &self.min, &self.max);
        let comparable = compare_partial(value, &self.min).is_some()
            && compare_partial(value, &self.max).is_some();
        if comparable && within != self.negated {
            return Ok(());
        }
        let (code, template) = if self.negated {
            ("not_in_range", "{0} should not be between {1} and {2}")
        } else {
            ("in_range", "{0} should be between {1} and {2}")
        };
        Err(Violation::out_of_range(code, template)
            .with_debug_arg(&self.min)
            .with_debug_arg(&self.max)
            .with_actual(value))
    }
}

/// Equality (or inequality) with an expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equal<B> {
    pub expected: B,
    pub negated: bool,
}

impl<T, B> Condition<T> for Equal<B>
where
    T: PartialEq<B> + Debug + ?Sized,
    B: Debug,
{
    fn check(&self, value: &T) -> Result<(), Violation> {
        if (*value == self.expected) != self.negated {
            return Ok(());
        }
        let (code, template) = if self.negated {
            ("not_equal", "{0} should not be equal to {1}")
        } else {
            ("equal", "{0} should be equal to {1}")
        };
        Err(Violation::generic(code, template)
            .with_debug_arg(&self.expected)
            .with_actual(value))
    }
}

#[must_use]
pub fn greater_than<B>(bound: B) -> Bound<B> {
    Bound { rule: OrderRule::GreaterThan, bound }
}

#[must_use]
pub fn greater_or_equal<B>(bound: B) -> Bound<B> {
    Bound { rule: OrderRule::GreaterOrEqual, bound }
}

#[must_use]
pub fn less_than<B>(bound: B) -> Bound<B> {
    Bound { rule: OrderRule::LessThan, bound }
}

#[must_use]
pub fn less_or_equal<B>(bound: B) -> Bound<B> {
    Bound { rule: OrderRule::LessOrEqual, bound }
}

#[must_use]
pub fn in_range<B>(min: B, max: B) -> InRange<B> {
    InRange { min, max, negated: false }
}

#[must_use]
pub fn equal_to<B>(expected: B) -> Equal<B> {
    Equal { expected, negated: false }
}

// ============================================================================
// VALIDATOR METHODS
// ============================================================================

impl<T: ?Sized, P: FailurePolicy> Validator<'_, T, P> {
    fn compare_with<B>(&self, rule: OrderRule, bound: B) -> Result<&Self, P::Error>
    where
        T: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.satisfies(Bound { rule, bound })
    }

    /// Checks `min <= value <= max`.
    ///
    /// # Errors
    ///
    /// Out-of-range violation when the value is outside the range or not
    /// comparable with it. An inverted range contains nothing.
    pub fn is_in_range<B>(&self, min: B, max: B) -> Result<&Self, P::Error>
    where
        T: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.satisfies(InRange { min, max, negated: false })
    }

    pub fn is_not_in_range<B>(&self, min: B, max: B) -> Result<&Self, P::Error>
    where
        T: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.satisfies(InRange { min, max, negated: true })
    }

    pub fn is_greater_than<B>(&self, bound: B) -> Result<&Self, P::Error>
    where
        T: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.compare_with(OrderRule::GreaterThan, bound)
    }

    pub fn is_not_greater_than<B>(&self, bound: B) -> Result<&Self, P::Error>
    where
        T: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.compare_with(OrderRule::NotGreaterThan, bound)
    }

    pub fn is_greater_or_equal<B>(&self, bound: B) -> Result<&Self, P::Error>
    where
        T: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.compare_with(OrderRule::GreaterOrEqual, bound)
    }

    pub fn is_not_greater_or_equal<B>(&self, bound: B) -> Result<&Self, P::Error>
    where
        T: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.compare_with(OrderRule::NotGreaterOrEqual, bound)
    }

    pub fn is_less_than<B>(&self, bound: B) -> Result<&Self, P::Error>
    where
        T: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.compare_with(OrderRule::LessThan, bound)
    }

    pub fn is_not_less_than<B>(&self, bound: B) -> Result<&Self, P::Error>
    where
        T: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.compare_with(OrderRule::NotLessThan, bound)
    }

    pub fn is_less_or_equal<B>(&self, bound: B) -> Result<&Self, P::Error>
    where
        T: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.compare_with(OrderRule::LessOrEqual, bound)
    }

    pub fn is_not_less_or_equal<B>(&self, bound: B) -> Result<&Self, P::Error>
    where
        T: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.compare_with(OrderRule::NotLessOrEqual, bound)
    }

    pub fn is_equal_to<B>(&self, expected: B) -> Result<&Self, P::Error>
    where
        T: PartialEq<B> + Debug,
        B: Debug,
    {
        self.satisfies(Equal { expected, negated: false })
    }

    pub fn is_not_equal_to<B>(&self, expected: B) -> Result<&Self, P::Error>
    where
        T: PartialEq<B> + Debug,
        B: Debug,
    {
        self.satisfies(Equal { expected, negated: true })
    }
}
