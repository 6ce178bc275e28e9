//! Macros for defining conditions and starting chains.
//!
//! # Available Macros
//!
//! - [`condition!`]: Create a complete condition (struct + `Condition` impl + factory fn)
//! - [`requires!`], [`ensures!`], [`invariant!`]: Start a chain named after the expression
//!
//! # Examples
//!
//! ```
//! use nebula_conditions::condition;
//! use nebula_conditions::foundation::{Condition, Violation};
//! use nebula_conditions::prelude::*;
//!
//! condition! {
//!     /// Strictly positive.
//!     pub Positive for i64;
//!     rule(input) { *input > 0 }
//!     violation(input) {
//!         Violation::out_of_range("positive", "{0} should be positive").with_actual(input)
//!     }
//!     fn positive();
//! }
//!
//! let balance = -5_i64;
//! let err = requires!(balance).satisfies(positive()).unwrap_err();
//! assert_eq!(err.message(), "balance should be positive. The actual value is -5.");
//! ```

// ============================================================================
// CONDITION MACRO
// ============================================================================

/// Creates a complete condition: struct definition, `Condition` implementation
/// and factory function.
///
/// # Variants
///
/// **Unit condition** over a fixed type or over every type with a bound:
/// ```rust,ignore
/// condition! {
///     pub IsTrue for bool;
///     rule(input) { *input }
///     violation(input) { Violation::generic("true", "{0} should be true") }
///     fn is_true();
/// }
///
/// condition! {
///     pub NotBlank for <S: Text>;
///     rule(input) { input.text().is_some_and(|t| !t.trim().is_empty()) }
///     violation(input) { Violation::generic("not_blank", "{0} should not be blank") }
///     fn not_blank();
/// }
/// ```
///
/// **Condition with fields**; the factory body builds the struct:
/// ```rust,ignore
/// condition! {
///     pub StartsWith { prefix: Cow<'static, str> } for <S: Text>;
///     rule(self, input) { input.text().is_some_and(|t| t.starts_with(&*self.prefix)) }
///     violation(self, input) { Violation::generic("starts_with", "{0} should start with {1}") }
///     fn starts_with(prefix: impl Into<Cow<'static, str>>) {
///         StartsWith { prefix: prefix.into() }
///     }
/// }
/// ```
#[macro_export]
macro_rules! condition {
    // ── Variant 1: Unit condition over a bounded generic subject ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for <$subject:ident : $bound:ident>;
        rule($inp:ident) $rule:block
        violation($vinp:ident) $violation:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl<$subject: $bound + ?Sized> $crate::foundation::Condition<$subject>
            for $name
        {
            #[allow(unused_variables)]
            fn check(
                &self,
                $inp: &$subject,
            ) -> ::std::result::Result<(), $crate::foundation::Violation> {
                if $rule {
                    Ok(())
                } else {
                    let $vinp = $inp;
                    Err($violation)
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 2: Unit condition over a fixed subject type ──────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        violation($vinp:ident) $violation:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Condition<$input> for $name {
            #[allow(unused_variables)]
            fn check(
                &self,
                $inp: &$input,
            ) -> ::std::result::Result<(), $crate::foundation::Violation> {
                if $rule {
                    Ok(())
                } else {
                    let $vinp = $inp;
                    Err($violation)
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 3: Fields over a bounded generic subject ─────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? }
            for <$subject:ident : $bound:ident>;
        rule($self_:ident, $inp:ident) $rule:block
        violation($self2:ident, $vinp:ident) $violation:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) $body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl<$subject: $bound + ?Sized> $crate::foundation::Condition<$subject>
            for $name
        {
            #[allow(unused_variables)]
            fn check(
                &$self_,
                $inp: &$subject,
            ) -> ::std::result::Result<(), $crate::foundation::Violation> {
                if $rule {
                    Ok(())
                } else {
                    let $vinp = $inp;
                    Err($violation)
                }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name $body
    };

    // ── Variant 4: Fields over a fixed subject type ──────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        violation($self2:ident, $vinp:ident) $violation:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) $body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $crate::foundation::Condition<$input> for $name {
            #[allow(unused_variables)]
            fn check(
                &$self_,
                $inp: &$input,
            ) -> ::std::result::Result<(), $crate::foundation::Violation> {
                if $rule {
                    Ok(())
                } else {
                    let $vinp = $inp;
                    Err($violation)
                }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name $body
    };
}

// ============================================================================
// ENTRY MACROS
// ============================================================================

/// Starts a precondition chain named after the expression.
///
/// ```
/// use nebula_conditions::prelude::*;
///
/// let retries = 0u8;
/// let err = requires!(retries).is_greater_than(0u8).unwrap_err();
/// assert_eq!(err.name(), "retries");
/// ```
#[macro_export]
macro_rules! requires {
    ($value:expr $(,)?) => {
        $crate::requires(&$value, stringify!($value))
    };
    ($value:expr, $name:expr $(,)?) => {
        $crate::requires(&$value, $name)
    };
}

/// Starts a postcondition chain named after the expression.
#[macro_export]
macro_rules! ensures {
    ($value:expr $(,)?) => {
        $crate::ensures(&$value, stringify!($value))
    };
    ($value:expr, $name:expr $(,)?) => {
        $crate::ensures(&$value, $name)
    };
}

/// Starts an invariant chain named after the expression.
#[macro_export]
macro_rules! invariant {
    ($value:expr $(,)?) => {
        $crate::invariant(&$value, stringify!($value))
    };
    ($value:expr, $name:expr $(,)?) => {
        $crate::invariant(&$value, $name)
    };
}
