//! Predicates: the individual rules a chain is built from
//!
//! A predicate looks at one string and returns a [`Verdict`](crate::Verdict).
//! Anything implementing [`Predicate`] can be registered on a
//! [`ValidatorChain`](crate::ValidatorChain), including plain functions and
//! closures of type `Fn(&str) -> Verdict`.
//!
//! # Example
//!
//! ```rust
//! use checklist::predicate::*;
//! use checklist::Verdict;
//!
//! // Stock predicates
//! assert!(not_empty().evaluate("hello").passed());
//! assert!(starts_with_capital().evaluate("hello").failed());
//!
//! // Ad-hoc predicates from a boolean check
//! let no_digits = rule(|s: &str| !s.chars().any(char::is_numeric), "contains digits");
//! assert_eq!(no_digits.evaluate("r2d2").reason(), "contains digits");
//!
//! // Or from a function returning a verdict
//! fn ascii_only(s: &str) -> Verdict {
//!     Verdict::check(s.is_ascii(), "is not ascii")
//! }
//! assert!(ascii_only.evaluate("plain").passed());
//! ```

mod combinators;
mod string;

// Re-export core trait
pub use combinators::{rule, Predicate, PredicateExt, Rule};

// Re-export string predicates
pub use string::{
    has_single_space, not_empty, starts_with_capital, HasSingleSpace, NotEmpty, StartsWithCapital,
};
