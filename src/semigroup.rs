//! Semigroup trait for associative operations
//!
//! A Semigroup is a type with an associative binary operation. Validation
//! reports are combined this way: two results merge into one holding every
//! reason from both, in order, instead of stopping at the first failure.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Semigroup, the `combine` operation must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use checklist::{Semigroup, ValidationResult};
//!
//! let first = ValidationResult::from_reasons(["is empty"]);
//! let second = ValidationResult::from_reasons(["does not have single space"]);
//!
//! let merged = first.combine(second);
//! assert_eq!(merged.reasons(), ["is empty", "does not have single space"]);
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Note on Ownership
///
/// The `combine` method takes `self` by value, not by reference. If you need to
/// preserve the original values, you must clone them before combining.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use checklist::Semigroup;
    ///
    /// let v1 = vec!["a"];
    /// let v2 = vec!["b"];
    /// assert_eq!(v1.combine(v2), vec!["a", "b"]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
