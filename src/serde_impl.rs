//! Serde support for validation results (feature-gated)
//!
//! A [`ValidationResult`] serializes as `{ "passed": bool, "reasons": [...] }`.
//! Deserialization checks that the two fields agree, so a document claiming
//! to pass while listing reasons is rejected.
//!
//! # Example
//!
//! ```rust
//! use checklist::chain;
//! use checklist::predicate::*;
//!
//! let v = chain![starts_with_capital(), has_single_space()];
//! let json = serde_json::to_string(&v.evaluate("Hello")).unwrap();
//! assert_eq!(json, r#"{"passed":false,"reasons":["does not have single space"]}"#);
//!
//! let back: checklist::ValidationResult = serde_json::from_str(&json).unwrap();
//! assert_eq!(back.reasons(), ["does not have single space"]);
//! ```

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ValidationResult;

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("passed", &self.passed())?;
        state.serialize_field("reasons", self.reasons())?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawResult {
    passed: bool,
    #[serde(default)]
    reasons: Vec<String>,
}

impl<'de> Deserialize<'de> for ValidationResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawResult::deserialize(deserializer)?;
        if raw.passed != raw.reasons.is_empty() {
            return Err(serde::de::Error::custom(
                "`passed` must be true exactly when `reasons` is empty",
            ));
        }
        Ok(ValidationResult::from_reasons(raw.reasons))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_failure() {
        let r = ValidationResult::from_reasons(["is empty", "does not have single space"]);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(
            json,
            r#"{"passed":false,"reasons":["is empty","does not have single space"]}"#
        );
    }

    #[test]
    fn test_serialize_pass() {
        let json = serde_json::to_string(&ValidationResult::pass()).unwrap();
        assert_eq!(json, r#"{"passed":true,"reasons":[]}"#);
    }

    #[test]
    fn test_deserialize_consistent() {
        let r: ValidationResult =
            serde_json::from_str(r#"{"passed":false,"reasons":["is empty"]}"#).unwrap();
        assert_eq!(r.reasons(), ["is empty"]);

        let r: ValidationResult = serde_json::from_str(r#"{"passed":true}"#).unwrap();
        assert!(r.passed());
    }

    #[test]
    fn test_deserialize_rejects_inconsistent() {
        let r: Result<ValidationResult, _> =
            serde_json::from_str(r#"{"passed":true,"reasons":["is empty"]}"#);
        assert!(r.is_err());

        let r: Result<ValidationResult, _> =
            serde_json::from_str(r#"{"passed":false,"reasons":[]}"#);
        assert!(r.is_err());
    }
}
