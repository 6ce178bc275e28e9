//! Cardinality and membership helpers over possibly-absent sequences.
//!
//! Every helper takes `Option<I>`; `None` is a null sequence and behaves like
//! an empty one. Counting never walks further than the answer requires: an
//! iterator with an exact `size_hint` is answered without iteration, any
//! other is consumed with early exit.
//!
//! ```
//! use nebula_conditions::sequence;
//!
//! let xs = vec![1, 2, 3];
//! assert!(sequence::has_length(Some(&xs), 3));
//! assert!(sequence::is_longer_than(Some((0..).take_while(|n| *n < 10)), 5));
//! assert!(sequence::is_empty(None::<&Vec<i32>>));
//! assert!(sequence::contains_any(Some(&xs), Some(&[9, 2])));
//! ```

pub mod subject;

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

pub use subject::Sequence;

// ============================================================================
// CARDINALITY
// ============================================================================

/// Length of an iterator when its `size_hint` is exact.
#[inline]
pub fn exact_len<I: Iterator + ?Sized>(iter: &I) -> Option<usize> {
    match iter.size_hint() {
        (lo, Some(hi)) if lo == hi => Some(lo),
        _ => None,
    }
}

/// Counts at most `limit` elements.
pub fn count_up_to<I: IntoIterator>(seq: Option<I>, limit: usize) -> usize {
    let Some(seq) = seq else { return 0 };
    let iter = seq.into_iter();
    match exact_len(&iter) {
        Some(len) => len.min(limit),
        None => iter.take(limit).count(),
    }
}

/// Compares the length of `seq` with `n`, walking at most `n + 1` elements.
pub fn length_cmp<I: IntoIterator>(seq: Option<I>, n: usize) -> Ordering {
    count_up_to(seq, n.saturating_add(1)).cmp(&n)
}

pub fn is_empty<I: IntoIterator>(seq: Option<I>) -> bool {
    count_up_to(seq, 1) == 0
}

pub fn has_length<I: IntoIterator>(seq: Option<I>, n: usize) -> bool {
    length_cmp(seq, n).is_eq()
}

pub fn is_shorter_than<I: IntoIterator>(seq: Option<I>, n: usize) -> bool {
    length_cmp(seq, n).is_lt()
}

pub fn is_shorter_or_equal<I: IntoIterator>(seq: Option<I>, n: usize) -> bool {
    length_cmp(seq, n).is_le()
}

pub fn is_longer_than<I: IntoIterator>(seq: Option<I>, n: usize) -> bool {
    length_cmp(seq, n).is_gt()
}

pub fn is_longer_or_equal<I: IntoIterator>(seq: Option<I>, n: usize) -> bool {
    length_cmp(seq, n).is_ge()
}

// ============================================================================
// MEMBERSHIP
// ============================================================================

/// Linear scan for `element`. Items may be owned or borrowed.
pub fn contains<I, E>(seq: Option<I>, element: &E) -> bool
where
    I: IntoIterator,
    I::Item: Borrow<E>,
    E: PartialEq + ?Sized,
{
    seq.is_some_and(|seq| seq.into_iter().any(|item| item.borrow() == element))
}

/// `true` when the two sequences share at least one element.
///
/// `false` when either side is null or empty.
pub fn contains_any<I, J>(seq: Option<I>, candidates: Option<J>) -> bool
where
    I: IntoIterator,
    I::Item: Hash + Eq,
    J: IntoIterator<Item = I::Item>,
{
    let (Some(seq), Some(candidates)) = (seq, candidates) else {
        return false;
    };
    let mut candidates = candidates.into_iter().peekable();
    if candidates.peek().is_none() {
        return false;
    }
    let set: HashSet<I::Item> = seq.into_iter().collect();
    !set.is_empty() && candidates.any(|candidate| set.contains(&candidate))
}

/// `true` when every candidate occurs in `seq`.
///
/// Vacuously `true` for null or empty candidates, in which case `seq` is not
/// walked at all.
pub fn contains_all<I, J>(seq: Option<I>, candidates: Option<J>) -> bool
where
    I: IntoIterator,
    I::Item: Hash + Eq,
    J: IntoIterator<Item = I::Item>,
{
    let Some(candidates) = candidates else {
        return true;
    };
    let mut candidates = candidates.into_iter().peekable();
    if candidates.peek().is_none() {
        return true;
    }
    let Some(seq) = seq else {
        return false;
    };
    let set: HashSet<I::Item> = seq.into_iter().collect();
    !set.is_empty() && candidates.all(|candidate| set.contains(&candidate))
}

// ============================================================================
// LENGTH RULES
// ============================================================================

/// A length constraint shared by the text and collection checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthRule {
    Exactly(usize),
    NotExactly(usize),
    ShorterThan(usize),
    NotShorterThan(usize),
    ShorterOrEqual(usize),
    NotShorterOrEqual(usize),
    LongerThan(usize),
    NotLongerThan(usize),
    LongerOrEqual(usize),
    NotLongerOrEqual(usize),
    /// Inclusive on both ends. An inverted range admits nothing.
    Between(usize, usize),
}

impl LengthRule {
    /// Number of elements that must be counted to decide the rule.
    #[must_use]
    pub const fn limit(self) -> usize {
        match self {
            Self::Exactly(n)
            | Self::NotExactly(n)
            | Self::ShorterThan(n)
            | Self::NotShorterThan(n)
            | Self::ShorterOrEqual(n)
            | Self::NotShorterOrEqual(n)
            | Self::LongerThan(n)
            | Self::NotLongerThan(n)
            | Self::LongerOrEqual(n)
            | Self::NotLongerOrEqual(n)
            | Self::Between(_, n) => n.saturating_add(1),
        }
    }

    /// Whether a length admits the rule. `count` may be saturated at [`limit`](Self::limit).
    #[must_use]
    pub const fn admits(self, count: usize) -> bool {
        match self {
            Self::Exactly(n) => count == n,
            Self::NotExactly(n) => count != n,
            Self::ShorterThan(n) | Self::NotLongerOrEqual(n) => count < n,
            Self::NotShorterThan(n) | Self::LongerOrEqual(n) => count >= n,
            Self::ShorterOrEqual(n) | Self::NotLongerThan(n) => count <= n,
            Self::NotShorterOrEqual(n) | Self::LongerThan(n) => count > n,
            Self::Between(min, max) => min <= count && count <= max,
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Exactly(_) => "length",
            Self::NotExactly(_) => "not_length",
            Self::ShorterThan(_) => "shorter_than",
            Self::NotShorterThan(_) => "not_shorter_than",
            Self::ShorterOrEqual(_) => "shorter_or_equal",
            Self::NotShorterOrEqual(_) => "not_shorter_or_equal",
            Self::LongerThan(_) => "longer_than",
            Self::NotLongerThan(_) => "not_longer_than",
            Self::LongerOrEqual(_) => "longer_or_equal",
            Self::NotLongerOrEqual(_) => "not_longer_or_equal",
            Self::Between(..) => "length_between",
        }
    }

    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::Exactly(_) => "{0} should have a length of {1}",
            Self::NotExactly(_) => "{0} should not have a length of {1}",
            Self::ShorterThan(_) => "{0} should be shorter than {1}",
            Self::NotShorterThan(_) => "{0} should not be shorter than {1}",
            Self::ShorterOrEqual(_) => "{0} should be shorter than or equal to {1}",
            Self::NotShorterOrEqual(_) => "{0} should not be shorter than or equal to {1}",
            Self::LongerThan(_) => "{0} should be longer than {1}",
            Self::NotLongerThan(_) => "{0} should not be longer than {1}",
            Self::LongerOrEqual(_) => "{0} should be longer than or equal to {1}",
            Self::NotLongerOrEqual(_) => "{0} should not be longer than or equal to {1}",
            Self::Between(..) => "{0} should have a length between {1} and {2}",
        }
    }

    /// Bounds of the rule, in placeholder order.
    #[must_use]
    pub fn args(self) -> smallvec::SmallVec<[usize; 2]> {
        match self {
            Self::Between(min, max) => smallvec::smallvec![min, max],
            Self::Exactly(n)
            | Self::NotExactly(n)
            | Self::ShorterThan(n)
            | Self::NotShorterThan(n)
            | Self::ShorterOrEqual(n)
            | Self::NotShorterOrEqual(n)
            | Self::LongerThan(n)
            | Self::NotLongerThan(n)
            | Self::LongerOrEqual(n)
            | Self::NotLongerOrEqual(n) => smallvec::smallvec![n],
        }
    }

    /// Builds the violation reported when the rule does not hold.
    pub(crate) fn violation(self) -> crate::foundation::Violation {
        self.args().into_iter().fold(
            crate::foundation::Violation::generic(self.code(), self.template()),
            |violation, bound| violation.with_arg(bound.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    /// An iterator without an exact size hint that counts how far it was walked.
    struct Walk<'a> {
        left: usize,
        pulled: &'a Cell<usize>,
    }

    impl Iterator for Walk<'_> {
        type Item = usize;

        fn next(&mut self) -> Option<usize> {
            if self.left == 0 {
                return None;
            }
            self.left -= 1;
            self.pulled.set(self.pulled.get() + 1);
            Some(self.left)
        }
    }

    /// A walk that counts how many times it was dropped.
    struct Tracked<'a> {
        walk: Walk<'a>,
        dropped: &'a Cell<usize>,
    }

    impl<'a> Tracked<'a> {
        fn new(left: usize, pulled: &'a Cell<usize>, dropped: &'a Cell<usize>) -> Self {
            Self { walk: Walk { left, pulled }, dropped }
        }
    }

    impl Iterator for Tracked<'_> {
        type Item = usize;

        fn next(&mut self) -> Option<usize> {
            self.walk.next()
        }
    }

    impl Drop for Tracked<'_> {
        fn drop(&mut self) {
            self.dropped.set(self.dropped.get() + 1);
        }
    }

    #[test]
    fn test_iterators_dropped_on_early_exit() {
        let pulled = Cell::new(0);
        let dropped = Cell::new(0);

        assert!(is_longer_than(Some(Tracked::new(100, &pulled, &dropped)), 2));
        assert_eq!(pulled.get(), 3);
        assert_eq!(dropped.get(), 1);

        let candidates = Cell::new(0);
        assert!(contains_any(
            Some(Tracked::new(10, &pulled, &dropped)),
            Some(Tracked::new(50, &candidates, &dropped)),
        ));
        // Candidates count down from 49, so the walk stops at the first hit, 9.
        assert_eq!(candidates.get(), 41);
        assert_eq!(dropped.get(), 3);
    }

    #[test]
    fn test_vacuous_contains_all_drops_without_walking() {
        let pulled = Cell::new(0);
        let dropped = Cell::new(0);

        let seq = Tracked::new(10, &pulled, &dropped);
        assert!(contains_all(Some(seq), Some(Vec::<usize>::new())));
        let seq = Tracked::new(10, &pulled, &dropped);
        assert!(contains_all(Some(seq), None::<Vec<usize>>));
        assert_eq!(pulled.get(), 0);
        assert_eq!(dropped.get(), 2);

        let candidates = Tracked::new(3, &pulled, &dropped);
        assert!(!contains_all(None::<Vec<usize>>, Some(candidates)));
        assert_eq!(dropped.get(), 3);
    }

    #[test]
    fn test_exact_len() {
        assert_eq!(exact_len(&[1, 2, 3].iter()), Some(3));
        assert_eq!(exact_len(&(0..10).filter(|n| n % 2 == 0)), None);
    }

    #[test]
    fn test_length_cmp_walks_at_most_n_plus_one() {
        let pulled = Cell::new(0);
        let walk = Walk { left: 1_000, pulled: &pulled };
        assert_eq!(length_cmp(Some(walk), 5), Ordering::Greater);
        assert_eq!(pulled.get(), 6);
    }

    #[test]
    fn test_exact_size_is_not_walked() {
        let pulled = Cell::new(0);
        let xs: Vec<usize> = (0..100).collect();
        let counted = xs.iter().inspect(|_| pulled.set(pulled.get() + 1));
        assert!(is_longer_than(Some(counted), 50));
        assert_eq!(pulled.get(), 0);
    }

    #[rstest]
    #[case(1, false, false, true)]
    #[case(2, false, true, false)]
    #[case(3, true, false, false)]
    fn test_cardinality(
        #[case] n: usize,
        #[case] shorter: bool,
        #[case] equal: bool,
        #[case] longer: bool,
    ) {
        let xs = vec!['a', 'b'];
        assert_eq!(is_shorter_than(Some(&xs), n), shorter);
        assert_eq!(has_length(Some(&xs), n), equal);
        assert_eq!(is_longer_than(Some(&xs), n), longer);
    }

    #[test]
    fn test_null_is_empty() {
        let none: Option<&[u8]> = None;
        assert!(is_empty(none));
        assert!(has_length(none, 0));
        assert!(is_shorter_than(none, 1));
        assert!(!is_longer_or_equal(none, 1));
    }

    #[test]
    fn test_contains_borrowed_and_owned() {
        let words = vec!["a".to_string(), "b".to_string()];
        assert!(contains(Some(&words), &"b".to_string()));
        assert!(!contains(Some(words.iter().map(String::as_str)), "c"));
        assert!(contains(Some(vec![1, 2]), &2));
        assert!(!contains(None::<Vec<i32>>, &2));
    }

    #[test]
    fn test_contains_any() {
        let xs = [1, 2, 3];
        assert!(contains_any(Some(&xs), Some(&[9, 2])));
        assert!(!contains_any(Some(&xs), Some(&[9, 8])));
        assert!(!contains_any(Some(&xs), Some(&[])));
        assert!(!contains_any(None::<&[i32; 3]>, Some(&[1])));
        assert!(!contains_any(Some(&[]), Some(&[1])));
    }

    #[test]
    fn test_contains_all_vacuous_without_walking() {
        let pulled = Cell::new(0);
        let walk = Walk { left: 10, pulled: &pulled };
        assert!(contains_all(Some(walk), Some(Vec::<usize>::new())));
        assert_eq!(pulled.get(), 0);
        assert!(contains_all(None::<Vec<u8>>, None::<Vec<u8>>));
    }

    #[test]
    fn test_contains_all() {
        let xs = [1, 2, 3];
        assert!(contains_all(Some(&xs), Some(&[3, 1])));
        assert!(!contains_all(Some(&xs), Some(&[3, 4])));
        assert!(!contains_all(None::<&[i32; 3]>, Some(&[1])));
    }

    #[rstest]
    #[case(LengthRule::Exactly(2), 2, true)]
    #[case(LengthRule::NotExactly(2), 2, false)]
    #[case(LengthRule::ShorterThan(2), 1, true)]
    #[case(LengthRule::NotShorterThan(2), 1, false)]
    #[case(LengthRule::ShorterOrEqual(2), 2, true)]
    #[case(LengthRule::NotShorterOrEqual(2), 3, true)]
    #[case(LengthRule::LongerThan(2), 3, true)]
    #[case(LengthRule::NotLongerThan(2), 3, false)]
    #[case(LengthRule::LongerOrEqual(2), 2, true)]
    #[case(LengthRule::NotLongerOrEqual(2), 2, false)]
    #[case(LengthRule::Between(1, 3), 3, true)]
    #[case(LengthRule::Between(3, 1), 2, false)]
    fn test_length_rules(#[case] rule: LengthRule, #[case] count: usize, #[case] expected: bool) {
        assert_eq!(rule.admits(count.min(rule.limit())), expected);
    }

    #[test]
    fn test_length_rule_violation() {
        let violation = LengthRule::Between(1, 3).violation();
        assert_eq!(violation.code(), "length_between");
        assert_eq!(violation.describe("tags"), "tags should have a length between 1 and 3");
    }
}
