//! Core predicate trait and adapters
//!
//! This module provides the foundational `Predicate` trait plus the small
//! adapters used to turn plain functions into predicates.

use std::fmt;

use crate::Verdict;

/// A single validation rule over a string.
///
/// A predicate inspects its input and returns a [`Verdict`]: passed, or failed
/// with a reason. Implementations must be pure: the same input always yields
/// the same verdict, and evaluation has no side effects.
///
/// `Send + Sync` is required so a finished chain can be shared between
/// threads and evaluated concurrently.
///
/// # Example
///
/// ```rust
/// use checklist::{Predicate, Verdict};
///
/// struct NoDigits;
///
/// impl Predicate for NoDigits {
///     fn evaluate(&self, input: &str) -> Verdict {
///         Verdict::check(!input.chars().any(|c| c.is_ascii_digit()), "contains digits")
///     }
/// }
///
/// assert!(NoDigits.evaluate("abc").passed());
/// assert_eq!(NoDigits.evaluate("a1").reason(), "contains digits");
/// ```
pub trait Predicate: Send + Sync {
    /// Evaluate this predicate against `input`.
    fn evaluate(&self, input: &str) -> Verdict;
}

// Blanket impl for closures and fn items
impl<F> Predicate for F
where
    F: Fn(&str) -> Verdict + Send + Sync,
{
    #[inline]
    fn evaluate(&self, input: &str) -> Verdict {
        self(input)
    }
}

/// Extension methods available on every predicate.
pub trait PredicateExt: Predicate + Sized + 'static {
    /// Erase the concrete type so predicates of different types can share a
    /// `Vec`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use checklist::predicate::*;
    ///
    /// let list: Vec<Box<dyn Predicate>> = vec![not_empty().boxed(), has_single_space().boxed()];
    /// assert_eq!(list.len(), 2);
    /// ```
    fn boxed(self) -> Box<dyn Predicate> {
        Box::new(self)
    }
}

impl<P: Predicate + Sized + 'static> PredicateExt for P {}

/// A boolean check paired with the reason reported when it fails.
///
/// Created by [`rule`].
#[derive(Clone, Copy)]
pub struct Rule<F> {
    check: F,
    reason: &'static str,
}

impl<F> Rule<F> {
    /// The reason reported on failure.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

impl<F> fmt::Debug for Rule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("reason", &self.reason)
            .finish_non_exhaustive()
    }
}

impl<F> Predicate for Rule<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    #[inline]
    fn evaluate(&self, input: &str) -> Verdict {
        Verdict::check((self.check)(input), self.reason)
    }
}

/// Lift a boolean check into a predicate that fails with `reason`.
///
/// # Example
///
/// ```rust
/// use checklist::predicate::*;
///
/// let short = rule(|s: &str| s.len() <= 5, "is too long");
/// assert!(short.evaluate("hello").passed());
/// assert_eq!(short.evaluate("hello world").reason(), "is too long");
/// ```
pub fn rule<F>(check: F, reason: &'static str) -> Rule<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    Rule { check, reason }
}
