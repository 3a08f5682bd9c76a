//! Strings that have passed a chain.

use std::fmt;
use std::ops::Deref;

/// A string that passed every predicate of the chain that produced it.
///
/// Returned by [`ValidatorChain::parse`](crate::ValidatorChain::parse). Code
/// that takes a `Validated` does not need to re-check its input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Validated(String);

impl Validated {
    pub(crate) fn new(value: String) -> Self {
        Validated(value)
    }

    /// Borrow the validated string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for Validated {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Validated {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Validated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Validated> for String {
    fn from(value: Validated) -> Self {
        value.0
    }
}
