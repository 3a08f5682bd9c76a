//! Validator chains: ordered, append-only predicate lists
//!
//! A [`ValidatorChain`] runs every registered predicate against an input, in
//! registration order, and reports every failure. It never stops at the first
//! failed rule.
//!
//! # Building a chain
//!
//! ```rust
//! use checklist::{chain, ValidatorChain};
//! use checklist::predicate::*;
//!
//! // Fluent, in place
//! let mut a = ValidatorChain::new(starts_with_capital());
//! a.add_predicate(has_single_space());
//!
//! // By value
//! let b = ValidatorChain::new(starts_with_capital()).with(has_single_space());
//!
//! // Macro: at least one predicate is required by the grammar
//! let c = chain![starts_with_capital(), has_single_space()];
//!
//! for chain in [&a, &b, &c] {
//!     assert_eq!(
//!         chain.evaluate("hello").reasons(),
//!         ["does not start with capital", "does not have single space"]
//!     );
//! }
//! ```
//!
//! # Aliasing
//!
//! [`ValidatorChain::add_predicate`] mutates the chain in place and hands back
//! the same `&mut` borrow, so every handle sees the new predicate.
//! [`ValidatorChain::with`] consumes the chain and returns it with the
//! predicate appended; nothing else can observe the chain while it grows.
//! Either way, registration must finish before the chain is shared for
//! evaluation.

mod error;
mod validated;

#[cfg(test)]
mod tests;

use std::fmt;

use crate::nonempty::NonEmptyVec;
use crate::predicate::Predicate;
use crate::ValidationResult;

pub use error::EmptyChainError;
pub use validated::Validated;

/// An ordered list of predicates evaluated together.
///
/// A chain always holds at least one predicate. It only grows by appending;
/// predicates are never removed or reordered. Evaluation borrows the chain
/// immutably, so a finished chain can be shared across threads.
///
/// # Example
///
/// ```rust
/// use checklist::ValidatorChain;
/// use checklist::predicate::*;
///
/// let chain = ValidatorChain::new(starts_with_capital()).with(has_single_space());
///
/// assert!(chain.evaluate("Hel lo").passed());
/// assert_eq!(chain.evaluate("Hello").reasons(), ["does not have single space"]);
/// ```
pub struct ValidatorChain {
    predicates: NonEmptyVec<Box<dyn Predicate>>,
}

impl ValidatorChain {
    /// Create a chain seeded with one predicate.
    pub fn new<P>(seed: P) -> Self
    where
        P: Predicate + 'static,
    {
        Self {
            predicates: NonEmptyVec::singleton(Box::new(seed)),
        }
    }

    /// Build a chain from boxed predicates, keeping their order.
    ///
    /// Fails immediately with [`EmptyChainError`] if no predicate is given.
    ///
    /// # Example
    ///
    /// ```rust
    /// use checklist::{ValidatorChain, EmptyChainError};
    /// use checklist::predicate::*;
    ///
    /// let chain = ValidatorChain::from_predicates(vec![
    ///     not_empty().boxed(),
    ///     starts_with_capital().boxed(),
    /// ])?;
    /// assert_eq!(chain.len(), 2);
    ///
    /// let empty = ValidatorChain::from_predicates(Vec::new());
    /// assert_eq!(empty.unwrap_err(), EmptyChainError);
    /// # Ok::<(), EmptyChainError>(())
    /// ```
    pub fn from_predicates<I>(predicates: I) -> Result<Self, EmptyChainError>
    where
        I: IntoIterator<Item = Box<dyn Predicate>>,
    {
        let predicates = NonEmptyVec::from_iter_checked(predicates).ok_or(EmptyChainError)?;
        Ok(Self { predicates })
    }

    /// Append a predicate and return the same chain for further registration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use checklist::ValidatorChain;
    /// use checklist::predicate::*;
    ///
    /// let mut chain = ValidatorChain::new(not_empty());
    /// chain
    ///     .add_predicate(starts_with_capital())
    ///     .add_predicate(has_single_space());
    /// assert_eq!(chain.len(), 3);
    /// ```
    pub fn add_predicate<P>(&mut self, predicate: P) -> &mut Self
    where
        P: Predicate + 'static,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Append a predicate to an owned chain and return it.
    pub fn with<P>(mut self, predicate: P) -> Self
    where
        P: Predicate + 'static,
    {
        self.add_predicate(predicate);
        self
    }

    /// Number of registered predicates. Always at least one.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Always `false`: a chain cannot be empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Run every predicate against `input` and collect all failure reasons.
    ///
    /// Predicates run in registration order and a failure does not stop the
    /// ones after it. The result passes only if no predicate failed.
    pub fn evaluate(&self, input: &str) -> ValidationResult {
        let mut result = ValidationResult::pass();
        for (_index, predicate) in self.predicates.iter().enumerate() {
            let verdict = predicate.evaluate(input);
            #[cfg(feature = "tracing")]
            if verdict.failed() {
                tracing::trace!(index = _index, reason = verdict.reason(), "predicate failed");
            }
            result.push(verdict);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            predicates = self.predicates.len(),
            failures = result.failure_count(),
            "evaluated validator chain"
        );

        result
    }

    /// Validate `input` and, on success, keep it as proof of validity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use checklist::chain;
    /// use checklist::predicate::*;
    ///
    /// let full_name = chain![starts_with_capital(), has_single_space()];
    ///
    /// let name = full_name.parse("Ada Lovelace").unwrap();
    /// assert_eq!(name.as_str(), "Ada Lovelace");
    ///
    /// let err = full_name.parse("ada").unwrap_err();
    /// assert_eq!(err.failure_count(), 2);
    /// ```
    pub fn parse(&self, input: impl Into<String>) -> Result<Validated, ValidationResult> {
        let input = input.into();
        let result = self.evaluate(&input);
        if result.passed() {
            Ok(Validated::new(input))
        } else {
            Err(result)
        }
    }
}

impl fmt::Debug for ValidatorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorChain")
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

/// Build a chain from boxed predicates.
///
/// Same as [`ValidatorChain::from_predicates`].
pub fn create_validator<I>(predicates: I) -> Result<ValidatorChain, EmptyChainError>
where
    I: IntoIterator<Item = Box<dyn Predicate>>,
{
    ValidatorChain::from_predicates(predicates)
}

/// Build a [`ValidatorChain`] from one or more predicates, in order.
///
/// An empty invocation does not compile.
///
/// # Example
///
/// ```rust
/// use checklist::chain;
/// use checklist::predicate::*;
///
/// let v = chain![starts_with_capital(), has_single_space(), not_empty()];
/// assert!(v.evaluate("Hel lo").passed());
/// ```
///
/// ```compile_fail
/// let v = checklist::chain![];
/// ```
#[macro_export]
macro_rules! chain {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::ValidatorChain::new($first)$(.with($rest))*
    };
}
