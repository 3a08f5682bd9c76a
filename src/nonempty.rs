//! Non-empty vector type
//!
//! `NonEmptyVec<T>` is a vector guaranteed to hold at least one element. A
//! [`ValidatorChain`](crate::ValidatorChain) keeps its predicates in one, so
//! once a chain exists the "at least one predicate" rule is carried by the
//! type rather than re-checked on every evaluation.
//!
//! # Examples
//!
//! ```
//! use checklist::NonEmptyVec;
//!
//! let mut nev = NonEmptyVec::singleton("seed");
//! nev.push("next");
//! assert_eq!(nev.head(), &"seed");
//! assert_eq!(nev.len(), 2);
//! ```

/// A non-empty vector guaranteed to contain at least one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a new non-empty vector with a head element and tail.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Create a non-empty vector from a single element.
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Try to create a non-empty vector from any iterator.
    ///
    /// Returns `None` if the iterator yields nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use checklist::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::from_iter_checked(1..4).unwrap();
    /// assert_eq!(nev.len(), 3);
    ///
    /// assert!(NonEmptyVec::from_iter_checked(std::iter::empty::<i32>()).is_none());
    /// ```
    pub fn from_iter_checked<I>(iter: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        let head = iter.next()?;
        Some(Self::new(head, iter.collect()))
    }

    /// Get the first element (always succeeds).
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Get the number of elements.
    ///
    /// Always >= 1.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`; present to satisfy clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Push an element to the end.
    pub fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Iterate over all elements, head first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Chain<std::iter::Once<&'a T>, std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}
