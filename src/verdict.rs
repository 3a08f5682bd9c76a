//! Outcome of a single predicate
//!
//! A [`Verdict`] is what one predicate says about one input: it either passed,
//! or it failed with a short human-readable reason. Failing is ordinary data
//! here, not an error.
//!
//! # Examples
//!
//! ```
//! use checklist::Verdict;
//!
//! let ok = Verdict::pass();
//! assert!(ok.passed());
//! assert_eq!(ok.reason(), "");
//!
//! let bad = Verdict::fail("is empty");
//! assert!(bad.failed());
//! assert_eq!(bad.reason(), "is empty");
//! ```

use std::borrow::Cow;

/// The result of evaluating one predicate against one input.
///
/// The reason is empty exactly when the verdict passed. Reasons are stored as
/// `Cow<'static, str>` so the common case of a fixed message never allocates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    passed: bool,
    reason: Cow<'static, str>,
}

impl Verdict {
    /// A passing verdict with no reason.
    #[inline]
    pub fn pass() -> Self {
        Verdict {
            passed: true,
            reason: Cow::Borrowed(""),
        }
    }

    /// A failing verdict carrying `reason`.
    ///
    /// The reason must be non-empty; an empty one is a programming error and
    /// trips a debug assertion.
    ///
    /// # Examples
    ///
    /// ```
    /// use checklist::Verdict;
    ///
    /// let v = Verdict::fail(format!("{} is too long", "name"));
    /// assert_eq!(v.reason(), "name is too long");
    /// ```
    #[inline]
    pub fn fail(reason: impl Into<Cow<'static, str>>) -> Self {
        let reason = reason.into();
        debug_assert!(!reason.is_empty(), "failing verdict needs a reason");
        Verdict {
            passed: false,
            reason,
        }
    }

    /// Pass when `condition` holds, otherwise fail with `reason`.
    ///
    /// # Examples
    ///
    /// ```
    /// use checklist::Verdict;
    ///
    /// assert!(Verdict::check(true, "never shown").passed());
    /// assert_eq!(Verdict::check(false, "is empty").reason(), "is empty");
    /// ```
    #[inline]
    pub fn check(condition: bool, reason: impl Into<Cow<'static, str>>) -> Self {
        if condition {
            Verdict::pass()
        } else {
            Verdict::fail(reason)
        }
    }

    /// Whether the predicate was satisfied.
    #[inline]
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Whether the predicate was violated.
    #[inline]
    pub fn failed(&self) -> bool {
        !self.passed
    }

    /// The failure reason, or `""` when the verdict passed.
    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Take the failure reason, `None` when the verdict passed.
    pub fn into_reason(self) -> Option<Cow<'static, str>> {
        if self.passed {
            None
        } else {
            Some(self.reason)
        }
    }
}

impl From<Verdict> for Result<(), Cow<'static, str>> {
    fn from(verdict: Verdict) -> Self {
        match verdict.into_reason() {
            None => Ok(()),
            Some(reason) => Err(reason),
        }
    }
}
