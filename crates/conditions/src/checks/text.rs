//! Text checks
//!
//! Subjects are anything implementing [`Text`]: owned and borrowed strings,
//! and `Option` of those, where `None` is null text. Lengths count `char`s
//! and stop counting as soon as the answer is known; null text has length 0.
//!
//! Positive checks fail on null text with a null violation. Negative content
//! checks (`does_not_start_with`, `does_not_match`, ...) pass on null text.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use regex::Regex;

use crate::foundation::{FailurePolicy, Validator, Violation, ViolationKind};
use crate::sequence::LengthRule;

// ============================================================================
// TEXT SUBJECT
// ============================================================================

/// A possibly-null piece of text.
pub trait Text {
    /// The text, or `None` when null.
    fn text(&self) -> Option<&str>;
}

impl Text for str {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Text for String {
    fn text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Text for Cow<'_, str> {
    fn text(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl Text for Box<str> {
    fn text(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl Text for Rc<str> {
    fn text(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl Text for Arc<str> {
    fn text(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl<S: Text + ?Sized> Text for &S {
    fn text(&self) -> Option<&str> {
        (**self).text()
    }
}

impl<S: Text> Text for Option<S> {
    fn text(&self) -> Option<&str> {
        self.as_ref().and_then(|s| s.text())
    }
}

/// Attaches the text as the actual value, or reports a null violation.
fn for_text(violation: Violation, text: Option<&str>) -> Violation {
    match text {
        Some(text) => violation.with_actual(text),
        None => violation.with_kind(ViolationKind::Null),
    }
}

/// `char` count of `text`, counting at most `limit`.
fn char_count_up_to(text: Option<&str>, limit: usize) -> usize {
    text.map_or(0, |t| t.chars().take(limit).count())
}

fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

// ============================================================================
// CONDITIONS
// ============================================================================

crate::condition! {
    /// Present and empty.
    pub Empty for <S: Text>;
    rule(input) { input.text().is_some_and(str::is_empty) }
    violation(input) { for_text(Violation::generic("empty", "{0} should be empty"), input.text()) }
    fn empty();
}

crate::condition! {
    /// Present and not empty.
    pub NotEmpty for <S: Text>;
    rule(input) { input.text().is_some_and(|t| !t.is_empty()) }
    violation(input) {
        for_text(Violation::generic("not_empty", "{0} should not be empty"), input.text())
    }
    fn not_empty();
}

crate::condition! {
    pub NullOrEmpty for <S: Text>;
    rule(input) { input.text().is_none_or(str::is_empty) }
    violation(input) {
        for_text(Violation::generic("null_or_empty", "{0} should be null or empty"), input.text())
    }
    fn null_or_empty();
}

crate::condition! {
    pub NotNullOrEmpty for <S: Text>;
    rule(input) { input.text().is_some_and(|t| !t.is_empty()) }
    violation(input) {
        for_text(
            Violation::generic("not_null_or_empty", "{0} should not be null or empty"),
            input.text(),
        )
    }
    fn not_null_or_empty();
}

crate::condition! {
    pub NullOrWhiteSpace for <S: Text>;
    rule(input) { input.text().is_none_or(is_blank) }
    violation(input) {
        for_text(
            Violation::generic("null_or_white_space", "{0} should be null or white space"),
            input.text(),
        )
    }
    fn null_or_white_space();
}

crate::condition! {
    /// Present and containing at least one non-white-space `char`.
    pub NotNullOrWhiteSpace for <S: Text>;
    rule(input) { input.text().is_some_and(|t| !is_blank(t)) }
    violation(input) {
        for_text(
            Violation::generic("not_null_or_white_space", "{0} should not be null or white space"),
            input.text(),
        )
    }
    fn not_null_or_white_space();
}

crate::condition! {
    /// `char` length constraint. Null text has length 0.
    pub Length { rule: LengthRule } for <S: Text>;
    rule(self, input) { self.rule.admits(char_count_up_to(input.text(), self.rule.limit())) }
    violation(self, input) { for_text(self.rule.violation(), input.text()) }
    fn length(rule: LengthRule) { Length { rule } }
}

crate::condition! {
    pub StartsWith { prefix: Cow<'static, str>, negated: bool } for <S: Text>;
    rule(self, input) {
        match input.text() {
            Some(text) => text.starts_with(&*self.prefix) != self.negated,
            None => self.negated,
        }
    }
    violation(self, input) {
        let (code, template) = if self.negated {
            ("not_starts_with", "{0} should not start with {1}")
        } else {
            ("starts_with", "{0} should start with {1}")
        };
        for_text(Violation::generic(code, template).with_debug_arg(&*self.prefix), input.text())
    }
    fn starts_with(prefix: impl Into<Cow<'static, str>>) {
        StartsWith { prefix: prefix.into(), negated: false }
    }
}

crate::condition! {
    pub EndsWith { suffix: Cow<'static, str>, negated: bool } for <S: Text>;
    rule(self, input) {
        match input.text() {
            Some(text) => text.ends_with(&*self.suffix) != self.negated,
            None => self.negated,
        }
    }
    violation(self, input) {
        let (code, template) = if self.negated {
            ("not_ends_with", "{0} should not end with {1}")
        } else {
            ("ends_with", "{0} should end with {1}")
        };
        for_text(Violation::generic(code, template).with_debug_arg(&*self.suffix), input.text())
    }
    fn ends_with(suffix: impl Into<Cow<'static, str>>) {
        EndsWith { suffix: suffix.into(), negated: false }
    }
}

crate::condition! {
    pub Contains { needle: Cow<'static, str>, negated: bool } for <S: Text>;
    rule(self, input) {
        match input.text() {
            Some(text) => text.contains(&*self.needle) != self.negated,
            None => self.negated,
        }
    }
    violation(self, input) {
        let (code, template) = if self.negated {
            ("not_contains", "{0} should not contain {1}")
        } else {
            ("contains", "{0} should contain {1}")
        };
        for_text(Violation::generic(code, template).with_debug_arg(&*self.needle), input.text())
    }
    fn contains(needle: impl Into<Cow<'static, str>>) {
        Contains { needle: needle.into(), negated: false }
    }
}

crate::condition! {
    /// Regular expression match anywhere in the text.
    pub Matches { pattern: Regex, negated: bool } for <S: Text>;
    rule(self, input) {
        match input.text() {
            Some(text) => self.pattern.is_match(text) != self.negated,
            None => self.negated,
        }
    }
    violation(self, input) {
        let (code, template) = if self.negated {
            ("not_matches", "{0} should not match {1}")
        } else {
            ("matches", "{0} should match {1}")
        };
        for_text(
            Violation::generic(code, template).with_debug_arg(self.pattern.as_str()),
            input.text(),
        )
    }
    fn matches(pattern: Regex) { Matches { pattern, negated: false } }
}

// ============================================================================
// VALIDATOR METHODS
// ============================================================================

/// Text checks on a [`Validator`] whose subject implements [`Text`].
pub trait TextChecks {
    type Error;

    /// Present and empty. Null text fails; use `is_null_or_empty` to admit it.
    fn is_empty(&self) -> Result<&Self, Self::Error>;
    /// Present and not empty.
    fn is_not_empty(&self) -> Result<&Self, Self::Error>;
    fn is_null_or_empty(&self) -> Result<&Self, Self::Error>;
    fn is_not_null_or_empty(&self) -> Result<&Self, Self::Error>;
    /// Null, empty, or only white space.
    fn is_null_or_white_space(&self) -> Result<&Self, Self::Error>;
    fn is_not_null_or_white_space(&self) -> Result<&Self, Self::Error>;

    /// Exactly `n` chars.
    fn has_length(&self, n: usize) -> Result<&Self, Self::Error>;
    fn does_not_have_length(&self, n: usize) -> Result<&Self, Self::Error>;
    fn is_shorter_than(&self, n: usize) -> Result<&Self, Self::Error>;
    fn is_shorter_or_equal(&self, n: usize) -> Result<&Self, Self::Error>;
    fn is_longer_than(&self, n: usize) -> Result<&Self, Self::Error>;
    fn is_longer_or_equal(&self, n: usize) -> Result<&Self, Self::Error>;
    /// Between `min` and `max` chars, inclusive.
    fn has_length_between(&self, min: usize, max: usize) -> Result<&Self, Self::Error>;

    fn starts_with(&self, prefix: impl Into<Cow<'static, str>>) -> Result<&Self, Self::Error>;
    fn does_not_start_with(
        &self,
        prefix: impl Into<Cow<'static, str>>,
    ) -> Result<&Self, Self::Error>;
    fn ends_with(&self, suffix: impl Into<Cow<'static, str>>) -> Result<&Self, Self::Error>;
    fn does_not_end_with(
        &self,
        suffix: impl Into<Cow<'static, str>>,
    ) -> Result<&Self, Self::Error>;
    /// Contains `needle` as a substring.
    fn contains(&self, needle: impl Into<Cow<'static, str>>) -> Result<&Self, Self::Error>;
    fn does_not_contain(&self, needle: impl Into<Cow<'static, str>>) -> Result<&Self, Self::Error>;
    /// `pattern` matches somewhere in the text. Anchor it to match the whole text.
    fn matches(&self, pattern: &Regex) -> Result<&Self, Self::Error>;
    fn does_not_match(&self, pattern: &Regex) -> Result<&Self, Self::Error>;
}

impl<S: Text + ?Sized, P: FailurePolicy> TextChecks for Validator<'_, S, P> {
    type Error = P::Error;

    fn is_empty(&self) -> Result<&Self, P::Error> {
        self.satisfies(Empty)
    }

    fn is_not_empty(&self) -> Result<&Self, P::Error> {
        self.satisfies(NotEmpty)
    }

    fn is_null_or_empty(&self) -> Result<&Self, P::Error> {
        self.satisfies(NullOrEmpty)
    }

    fn is_not_null_or_empty(&self) -> Result<&Self, P::Error> {
        self.satisfies(NotNullOrEmpty)
    }

    fn is_null_or_white_space(&self) -> Result<&Self, P::Error> {
        self.satisfies(NullOrWhiteSpace)
    }

    fn is_not_null_or_white_space(&self) -> Result<&Self, P::Error> {
        self.satisfies(NotNullOrWhiteSpace)
    }

    fn has_length(&self, n: usize) -> Result<&Self, P::Error> {
        self.satisfies(length(LengthRule::Exactly(n)))
    }

    fn does_not_have_length(&self, n: usize) -> Result<&Self, P::Error> {
        self.satisfies(length(LengthRule::NotExactly(n)))
    }

    fn is_shorter_than(&self, n: usize) -> Result<&Self, P::Error> {
        self.satisfies(length(LengthRule::ShorterThan(n)))
    }

    fn is_shorter_or_equal(&self, n: usize) -> Result<&Self, P::Error> {
        self.satisfies(length(LengthRule::ShorterOrEqual(n)))
    }

    fn is_longer_than(&self, n: usize) -> Result<&Self, P::Error> {
        self.satisfies(length(LengthRule::LongerThan(n)))
    }

    fn is_longer_or_equal(&self, n: usize) -> Result<&Self, P::Error> {
        self.satisfies(length(LengthRule::LongerOrEqual(n)))
    }

    fn has_length_between(&self, min: usize, max: usize) -> Result<&Self, P::Error> {
        self.satisfies(length(LengthRule::Between(min, max)))
    }

    fn starts_with(&self, prefix: impl Into<Cow<'static, str>>) -> Result<&Self, P::Error> {
        self.satisfies(starts_with(prefix))
    }

    fn does_not_start_with(&self, prefix: impl Into<Cow<'static, str>>) -> Result<&Self, P::Error> {
        self.satisfies(StartsWith { prefix: prefix.into(), negated: true })
    }

    fn ends_with(&self, suffix: impl Into<Cow<'static, str>>) -> Result<&Self, P::Error> {
        self.satisfies(ends_with(suffix))
    }

    fn does_not_end_with(&self, suffix: impl Into<Cow<'static, str>>) -> Result<&Self, P::Error> {
        self.satisfies(EndsWith { suffix: suffix.into(), negated: true })
    }

    fn contains(&self, needle: impl Into<Cow<'static, str>>) -> Result<&Self, P::Error> {
        self.satisfies(contains(needle))
    }

    fn does_not_contain(&self, needle: impl Into<Cow<'static, str>>) -> Result<&Self, P::Error> {
        self.satisfies(Contains { needle: needle.into(), negated: true })
    }

    fn matches(&self, pattern: &Regex) -> Result<&Self, P::Error> {
        self.satisfies(matches(pattern.clone()))
    }

    fn does_not_match(&self, pattern: &Regex) -> Result<&Self, P::Error> {
        self.satisfies(Matches { pattern: pattern.clone(), negated: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::requires;
    use crate::foundation::ErrorKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const NULL: Option<&str> = None;

    #[test]
    fn test_subjects() {
        assert_eq!("a".text(), Some("a"));
        assert_eq!(String::from("b").text(), Some("b"));
        assert_eq!(Cow::Borrowed("c").text(), Some("c"));
        assert_eq!(Arc::<str>::from("d").text(), Some("d"));
        assert_eq!(Some(String::from("e")).text(), Some("e"));
        assert_eq!(NULL.text(), None);
    }

    #[test]
    fn test_empty_requires_present_text() {
        assert!(requires("", "s").is_empty().is_ok());
        assert!(requires("x", "s").is_not_empty().is_ok());

        let err = requires(&NULL, "s").is_empty().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentNull);
        let err = requires(&NULL, "s").is_not_empty().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentNull);

        let err = requires("", "s").is_not_empty().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.message(), "s should not be empty. The actual value is \"\".");
    }

    #[rstest]
    #[case(None, true, true)]
    #[case(Some(""), true, true)]
    #[case(Some(" \t\n"), false, true)]
    #[case(Some(" x "), false, false)]
    fn test_null_or_blank(
        #[case] text: Option<&str>,
        #[case] null_or_empty: bool,
        #[case] blank: bool,
    ) {
        let v = requires(&text, "s");
        assert_eq!(v.is_null_or_empty().is_ok(), null_or_empty);
        assert_eq!(v.is_not_null_or_empty().is_ok(), !null_or_empty);
        assert_eq!(v.is_null_or_white_space().is_ok(), blank);
        assert_eq!(v.is_not_null_or_white_space().is_ok(), !blank);
    }

    #[test]
    fn test_not_null_or_white_space_on_null_reports_null() {
        let err = requires(&NULL, "name").is_not_null_or_white_space().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentNull);
        assert_eq!(err.message(), "name should not be null or white space.");
    }

    #[test]
    fn test_lengths_count_chars() {
        let word = "héllo";
        let v = requires(&word, "word");
        assert!(v.has_length(5).is_ok());
        assert!(v.does_not_have_length(6).is_ok());
        assert!(v.is_shorter_than(6).is_ok());
        assert!(v.is_shorter_or_equal(5).is_ok());
        assert!(v.is_longer_than(4).is_ok());
        assert!(v.is_longer_or_equal(5).is_ok());
        assert!(v.has_length_between(1, 5).is_ok());

        let err = v.is_longer_than(5).unwrap_err();
        assert_eq!(err.code(), "longer_than");
        assert_eq!(err.message(), "word should be longer than 5. The actual value is \"héllo\".");
    }

    #[test]
    fn test_null_has_length_zero() {
        assert!(requires(&NULL, "s").has_length(0).is_ok());
        assert!(requires(&NULL, "s").is_shorter_than(1).is_ok());
        let err = requires(&NULL, "s").is_longer_or_equal(1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentNull);
    }

    #[test]
    fn test_null_text_has_length_zero_but_is_not_empty() {
        use crate::checks::SequenceChecks;

        let v = requires(&NULL, "s");
        assert!(v.has_length(0).is_ok());
        assert!(v.is_null_or_empty().is_ok());
        assert_eq!(v.is_empty().unwrap_err().kind(), ErrorKind::ArgumentNull);

        // Collections treat null as empty.
        let col: Option<Vec<u8>> = None;
        assert!(requires(&col, "col").is_empty().is_ok());
    }

    #[test]
    fn test_affixes() {
        let path = String::from("/api/v1/users");
        let v = requires(&path, "path");
        assert!(v.starts_with("/api").is_ok());
        assert!(v.does_not_start_with("api").is_ok());
        assert!(v.ends_with("users").is_ok());
        assert!(v.does_not_end_with("/").is_ok());
        assert!(v.contains("/v1/").is_ok());
        assert!(v.does_not_contain("v2").is_ok());

        let err = v.starts_with("/admin").unwrap_err();
        assert_eq!(
            err.message(),
            "path should start with \"/admin\". The actual value is \"/api/v1/users\"."
        );
    }

    #[test]
    fn test_content_checks_on_null() {
        let v = requires(&NULL, "s");
        assert!(v.does_not_start_with("a").is_ok());
        assert!(v.does_not_end_with("a").is_ok());
        assert!(v.does_not_contain("a").is_ok());
        assert_eq!(v.contains("a").unwrap_err().kind(), ErrorKind::ArgumentNull);
        assert_eq!(v.ends_with("a").unwrap_err().kind(), ErrorKind::ArgumentNull);
    }

    #[test]
    fn test_matches() {
        let semver = Regex::new(r"^\d+\.\d+\.\d+$").unwrap();
        assert!(requires("1.2.3", "version").matches(&semver).is_ok());
        assert!(requires("1.2", "version").does_not_match(&semver).is_ok());
        assert!(requires(&NULL, "version").does_not_match(&semver).is_ok());

        let err = requires("1.2", "version").matches(&semver).unwrap_err();
        assert_eq!(err.code(), "matches");
        assert!(err.message().starts_with("version should match \"^\\\\d+"));
    }
}
