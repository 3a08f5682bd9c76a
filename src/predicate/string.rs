//! String predicates
//!
//! This module provides the stock predicates for string validation.

use super::combinators::Predicate;
use crate::Verdict;

/// Whitespace for trimming: Unicode `White_Space` plus the ASCII information
/// separators U+001C..=U+001F.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Trim leading and trailing blank characters.
fn trim_blank(input: &str) -> &str {
    input.trim_matches(is_blank)
}

/// Predicate that passes when the input has non-whitespace content.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl NotEmpty {
    /// Reason reported on failure.
    pub const REASON: &'static str = "is empty";
}

impl Predicate for NotEmpty {
    #[inline]
    fn evaluate(&self, input: &str) -> Verdict {
        Verdict::check(!trim_blank(input).is_empty(), Self::REASON)
    }
}

/// Create a predicate that checks the string is not empty after trimming.
///
/// # Example
///
/// ```rust
/// use checklist::predicate::*;
///
/// assert!(not_empty().evaluate("hello").passed());
/// assert_eq!(not_empty().evaluate("   ").reason(), "is empty");
/// ```
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that passes when the first character is uppercase.
#[derive(Clone, Copy, Default, Debug)]
pub struct StartsWithCapital;

impl StartsWithCapital {
    /// Reason reported on failure.
    pub const REASON: &'static str = "does not start with capital";
}

impl Predicate for StartsWithCapital {
    #[inline]
    fn evaluate(&self, input: &str) -> Verdict {
        let capital = input.chars().next().is_some_and(char::is_uppercase);
        Verdict::check(capital, Self::REASON)
    }
}

/// Create a predicate that checks the string starts with an uppercase letter.
///
/// Leading whitespace is not skipped, and an empty string fails.
///
/// # Example
///
/// ```rust
/// use checklist::predicate::*;
///
/// assert!(starts_with_capital().evaluate("Hello").passed());
/// assert!(starts_with_capital().evaluate("hello").failed());
/// assert!(starts_with_capital().evaluate("").failed());
/// ```
pub fn starts_with_capital() -> StartsWithCapital {
    StartsWithCapital
}

/// Predicate that passes when the trimmed input holds exactly one space.
///
/// Only U+0020 is counted. Tabs, newlines and other whitespace inside the
/// string are ignored.
#[derive(Clone, Copy, Default, Debug)]
pub struct HasSingleSpace;

impl HasSingleSpace {
    /// Reason reported on failure.
    pub const REASON: &'static str = "does not have single space";
}

impl Predicate for HasSingleSpace {
    #[inline]
    fn evaluate(&self, input: &str) -> Verdict {
        let spaces = trim_blank(input).matches(' ').count();
        Verdict::check(spaces == 1, Self::REASON)
    }
}

/// Create a predicate that checks the trimmed string contains one space.
///
/// # Example
///
/// ```rust
/// use checklist::predicate::*;
///
/// assert!(has_single_space().evaluate("a b").passed());
/// assert!(has_single_space().evaluate("a b c").failed());
/// assert!(has_single_space().evaluate(" ab ").failed());
/// ```
pub fn has_single_space() -> HasSingleSpace {
    HasSingleSpace
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert_eq!(not_empty().evaluate("hello"), Verdict::pass());
        assert_eq!(not_empty().evaluate(""), Verdict::fail("is empty"));
        assert_eq!(not_empty().evaluate("   "), Verdict::fail("is empty"));
        assert_eq!(not_empty().evaluate("\t\n"), Verdict::fail("is empty"));
        assert!(not_empty().evaluate("  x  ").passed());
    }

    #[test]
    fn test_not_empty_treats_separators_as_blank() {
        for input in ["\x1c", "\x1d", "\x1e", "\x1f", " \x1f "] {
            assert_eq!(not_empty().evaluate(input), Verdict::fail("is empty"));
        }
        assert!(not_empty().evaluate("\x1fx\x1c").passed());
    }

    #[test]
    fn test_starts_with_capital() {
        assert!(starts_with_capital().evaluate("Hello").passed());
        assert!(starts_with_capital().evaluate("Ünïcode").passed());
        assert_eq!(
            starts_with_capital().evaluate("hello").reason(),
            "does not start with capital"
        );
        assert!(starts_with_capital().evaluate("").failed());
        assert!(starts_with_capital().evaluate(" Hello").failed());
        assert!(starts_with_capital().evaluate("1abc").failed());
    }

    #[test]
    fn test_has_single_space() {
        assert!(has_single_space().evaluate("a b").passed());
        assert!(has_single_space().evaluate("  a b  ").passed());
        assert!(has_single_space().evaluate("hello").failed());
        assert!(has_single_space().evaluate("   ").failed());
        assert_eq!(
            has_single_space().evaluate("a b c").reason(),
            "does not have single space"
        );
        assert!(has_single_space().evaluate("a  b").failed());
    }

    #[test]
    fn test_has_single_space_ignores_other_whitespace() {
        assert!(has_single_space().evaluate("a\tb").failed());
        assert!(has_single_space().evaluate("a\tb c").passed());
        assert!(has_single_space().evaluate("a\nb c").passed());
    }

    #[test]
    fn test_has_single_space_trims_separators() {
        assert!(has_single_space().evaluate("\x1f a").failed());
        assert!(has_single_space().evaluate("a \x1e").failed());
        assert!(has_single_space().evaluate("\x1ca b\x1d").passed());
    }
}
