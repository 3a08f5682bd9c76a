//! Composite result of running a validator chain
//!
//! A [`ValidationResult`] holds every failure reason produced while running a
//! chain, in the order the failing predicates were registered. Whether the
//! input passed is derived from that list: it passed exactly when no reason
//! was recorded, so the two can never disagree.
//!
//! # Examples
//!
//! ```
//! use checklist::{ValidationResult, Verdict};
//!
//! let result: ValidationResult = vec![
//!     Verdict::fail("does not start with capital"),
//!     Verdict::pass(),
//!     Verdict::fail("does not have single space"),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert!(result.failed());
//! assert_eq!(
//!     result.reasons(),
//!     ["does not start with capital", "does not have single space"]
//! );
//! ```

use std::fmt;

use crate::{Semigroup, Verdict};

/// The outcome of evaluating a chain: passed, plus the ordered failure reasons.
///
/// # Examples
///
/// ```
/// use checklist::ValidationResult;
///
/// let ok = ValidationResult::pass();
/// assert!(ok.passed());
/// assert!(ok.reasons().is_empty());
/// assert_eq!(ok.into_result(), Ok(()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ValidationResult {
    reasons: Vec<String>,
}

impl ValidationResult {
    /// A result with no failures.
    #[inline]
    pub fn pass() -> Self {
        Self::default()
    }

    /// Build a result from failure reasons, keeping their order.
    ///
    /// An empty iterator yields a passing result.
    pub fn from_reasons<I, S>(reasons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reasons: reasons.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether every predicate passed.
    #[inline]
    pub fn passed(&self) -> bool {
        self.reasons.is_empty()
    }

    /// Whether at least one predicate failed.
    #[inline]
    pub fn failed(&self) -> bool {
        !self.passed()
    }

    /// Failure reasons in registration order; empty when passed.
    #[inline]
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    /// Number of predicates that failed.
    #[inline]
    pub fn failure_count(&self) -> usize {
        self.reasons.len()
    }

    /// Fold one verdict in, recording its reason if it failed.
    pub fn push(&mut self, verdict: Verdict) {
        if let Some(reason) = verdict.into_reason() {
            self.reasons.push(reason.into_owned());
        }
    }

    /// Take the failure reasons.
    pub fn into_reasons(self) -> Vec<String> {
        self.reasons
    }

    /// Convert to a `Result`, failing with the reasons when any were recorded.
    ///
    /// # Examples
    ///
    /// ```
    /// use checklist::ValidationResult;
    ///
    /// let r = ValidationResult::from_reasons(["is empty"]);
    /// assert_eq!(r.into_result(), Err(vec!["is empty".to_string()]));
    /// ```
    pub fn into_result(self) -> Result<(), Vec<String>> {
        if self.reasons.is_empty() {
            Ok(())
        } else {
            Err(self.reasons)
        }
    }
}

impl Semigroup for ValidationResult {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self {
            reasons: self.reasons.combine(other.reasons),
        }
    }
}

impl Extend<Verdict> for ValidationResult {
    fn extend<I: IntoIterator<Item = Verdict>>(&mut self, iter: I) {
        for verdict in iter {
            self.push(verdict);
        }
    }
}

impl FromIterator<Verdict> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = Verdict>>(iter: I) -> Self {
        let mut result = Self::pass();
        result.extend(iter);
        result
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reasons.is_empty() {
            f.write_str("passed")
        } else {
            f.write_str(&self.reasons.join("; "))
        }
    }
}
