//! Comparison primitive shared by every ordering check.
//!
//! Ordering checks never compare values directly; they go through
//! [`compare_partial`] so that floating-point subjects work the same way as
//! integers, and so that an incomparable pair (a `NaN` on either side) makes
//! the check fail instead of silently passing.

use std::cmp::Ordering;

/// Compares two values of a totally ordered type.
///
/// `Option<T>` follows the standard library ordering: `None` sorts strictly
/// below any `Some`, and two `None`s compare equal.
///
/// ```
/// use std::cmp::Ordering;
/// use nebula_conditions::foundation::compare::compare;
///
/// assert_eq!(compare(&3, &7), Ordering::Less);
/// assert_eq!(compare(&None, &Some(1)), Ordering::Less);
/// assert_eq!(compare::<Option<i32>>(&None, &None), Ordering::Equal);
/// ```
#[inline]
pub fn compare<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Integer form of an [`Ordering`]: `-1`, `0` or `+1`.
#[inline]
pub const fn sign(ordering: Ordering) -> i8 {
    ordering as i8
}

/// Compares a subject against a bound of a possibly different type.
///
/// Returns `None` when the two values are incomparable.
#[inline]
pub fn compare_partial<T, B>(value: &T, bound: &B) -> Option<Ordering>
where
    T: PartialOrd<B> + ?Sized,
{
    value.partial_cmp(bound)
}

/// Returns `true` if `min <= value <= max`.
///
/// An inverted range (`min > max`) contains nothing.
#[inline]
pub fn is_within<T, B>(value: &T, min: &B, max: &B) -> bool
where
    T: PartialOrd<B> + ?Sized,
{
    matches!(
        compare_partial(value, min),
        Some(Ordering::Greater | Ordering::Equal)
    ) && matches!(
        compare_partial(value, max),
        Some(Ordering::Less | Ordering::Equal)
    )
}
