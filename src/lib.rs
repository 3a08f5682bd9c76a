//! # Checklist
//!
//! Composable string validation that reports every broken rule.
//!
//! A [`ValidatorChain`] is an ordered list of [`Predicate`]s. Evaluating it
//! runs every predicate against the input, in the order they were registered,
//! and collects the reason of each one that failed. It never stops at the
//! first failure, so callers get the full list of problems in one pass.
//!
//! ## Quick Example
//!
//! ```rust
//! use checklist::chain;
//! use checklist::predicate::*;
//!
//! let full_name = chain![starts_with_capital(), has_single_space()];
//!
//! assert!(full_name.evaluate("Hel lo").passed());
//!
//! let result = full_name.evaluate("hello");
//! assert!(result.failed());
//! assert_eq!(
//!     result.reasons(),
//!     ["does not start with capital", "does not have single space"]
//! );
//! ```
//!
//! ## Custom predicates
//!
//! Any `Fn(&str) -> Verdict` is a predicate, and [`predicate::rule`] lifts a
//! boolean check paired with a reason:
//!
//! ```rust
//! use checklist::{ValidatorChain, Verdict};
//! use checklist::predicate::*;
//!
//! fn no_digits(s: &str) -> Verdict {
//!     Verdict::check(!s.chars().any(|c| c.is_ascii_digit()), "contains digits")
//! }
//!
//! let v = ValidatorChain::new(not_empty())
//!     .with(no_digits)
//!     .with(rule(|s: &str| s.len() <= 8, "is too long"));
//!
//! assert_eq!(v.evaluate("r2d2 unit 9").reasons(), ["contains digits", "is too long"]);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events while evaluating chains
//! - `serde`: `Serialize`/`Deserialize` for [`ValidationResult`]
//! - `proptest`: `Arbitrary` for [`Verdict`] and [`ValidationResult`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod chain;
pub mod nonempty;
pub mod predicate;
pub mod semigroup;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod testing;
pub mod validation;
pub mod verdict;

// Re-exports
pub use chain::{create_validator, EmptyChainError, Validated, ValidatorChain};
pub use nonempty::NonEmptyVec;
pub use predicate::{Predicate, PredicateExt};
pub use semigroup::Semigroup;
pub use validation::ValidationResult;
pub use verdict::Verdict;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::chain;
    pub use crate::chain::{create_validator, EmptyChainError, Validated, ValidatorChain};
    pub use crate::predicate::{
        has_single_space, not_empty, rule, starts_with_capital, Predicate, PredicateExt,
    };
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::ValidationResult;
    pub use crate::verdict::Verdict;
}
