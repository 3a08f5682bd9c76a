//! Error types for chain construction.

/// Error returned when a chain is built from zero predicates.
///
/// A chain always needs a seed predicate. This is a caller bug, reported at
/// construction time instead of being deferred to evaluation.
///
/// # Examples
///
/// ```rust
/// use checklist::{create_validator, EmptyChainError};
///
/// let err = create_validator(Vec::new()).unwrap_err();
/// assert_eq!(err, EmptyChainError);
/// assert_eq!(err.to_string(), "validator chain needs at least one predicate");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyChainError;

impl std::fmt::Display for EmptyChainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("validator chain needs at least one predicate")
    }
}

impl std::error::Error for EmptyChainError {}
