//! Testing utilities for validator chains
//!
//! Assertion macros for [`ValidationResult`](crate::ValidationResult) values
//! and, with the `proptest` feature, `Arbitrary` implementations for the
//! crate's result types.
//!
//! # Examples
//!
//! ```rust
//! use checklist::{assert_fails, assert_passes, assert_reasons, chain};
//! use checklist::predicate::*;
//!
//! let v = chain![starts_with_capital(), has_single_space()];
//!
//! assert_passes!(v.evaluate("Hel lo"));
//! assert_fails!(v.evaluate("Hello"));
//! assert_reasons!(v.evaluate("Hello"), ["does not have single space"]);
//! ```

/// Assert that a validation result passed.
///
/// Panics with the recorded reasons otherwise.
///
/// # Example
///
/// ```rust
/// use checklist::{assert_passes, ValidationResult};
///
/// assert_passes!(ValidationResult::pass());
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($result:expr) => {
        match $result {
            ref result if result.passed() => {}
            ref result => {
                panic!("Expected pass, got failures: {:?}", result.reasons());
            }
        }
    };
}

/// Assert that a validation result failed.
///
/// # Example
///
/// ```rust
/// use checklist::{assert_fails, ValidationResult};
///
/// assert_fails!(ValidationResult::from_reasons(["is empty"]));
/// ```
#[macro_export]
macro_rules! assert_fails {
    ($result:expr) => {
        match $result {
            ref result if result.failed() => {}
            _ => {
                panic!("Expected failure, got pass");
            }
        }
    };
}

/// Assert that a validation result failed with exactly these reasons, in order.
///
/// # Example
///
/// ```rust
/// use checklist::{assert_reasons, ValidationResult};
///
/// let r = ValidationResult::from_reasons(["a", "b"]);
/// assert_reasons!(r, ["a", "b"]);
/// ```
#[macro_export]
macro_rules! assert_reasons {
    ($result:expr, $expected:expr) => {
        match $result {
            ref result if result.failed() => {
                assert_eq!(result.reasons(), $expected);
            }
            _ => {
                panic!("Expected failure with reasons {:?}, got pass", $expected);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{ValidationResult, Verdict};

#[cfg(feature = "proptest")]
impl Arbitrary for Verdict {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Verdict::pass()),
            "[a-z][a-z ]{0,24}".prop_map(Verdict::fail),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for ValidationResult {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop::collection::vec(any::<Verdict>(), 0..8)
            .prop_map(|verdicts| verdicts.into_iter().collect())
            .boxed()
    }
}
