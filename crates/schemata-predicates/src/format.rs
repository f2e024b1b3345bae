//! # String Formats
//!
//! Format predicates coerce the value to its string form first, so
//! `112233` checked against `\d+` yields the string `"112233"`. The
//! coercion is part of the contract: on success the result is always a
//! string, whatever the input type was.

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use schemata_core::{stringify, Rejection, Schema, Value};
use thiserror::Error;

/// A `formatted_string` pattern failed to compile.
#[derive(Error, Debug)]
#[error("invalid pattern {pattern:?}: {source}")]
pub struct PatternError {
    /// The pattern as supplied.
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// Accepts any value whose string form matches `pattern` in full.
///
/// The pattern is anchored at both ends, so `\d+` rejects `"12a"`. It is
/// compiled once, here.
///
/// # Errors
///
/// Returns [`PatternError`] if `pattern` is not a valid regular expression.
pub fn formatted_string(pattern: &str) -> Result<Schema, PatternError> {
    let anchored = Regex::new(&format!(r"\A(?:{pattern})\z")).map_err(|source| PatternError {
        pattern: pattern.to_string(),
        source,
    })?;
    let name = format!("formatted_string({pattern:?})");
    let pattern = pattern.to_string();
    Ok(Schema::predicate(name, move |value: &Value| {
        let text = stringify(value);
        if anchored.is_match(&text) {
            Ok(Value::String(text))
        } else {
            Err(Rejection::refused(
                "PatternMismatch",
                format!("{text:?} does not match pattern {pattern:?}"),
            ))
        }
    }))
}

/// Accepts an RFC 3339 timestamp (`2024-05-01T12:00:00Z`) or a calendar
/// date (`2024-05-01`), returning its string form.
pub fn date_string() -> Schema {
    Schema::predicate("date_string", |value: &Value| {
        let text = stringify(value);
        let is_timestamp = DateTime::parse_from_rfc3339(&text).is_ok();
        if is_timestamp || NaiveDate::parse_from_str(&text, "%Y-%m-%d").is_ok() {
            Ok(Value::String(text))
        } else {
            Err(Rejection::refused(
                "InvalidDate",
                format!("{text:?} is neither an RFC 3339 timestamp nor a YYYY-MM-DD date"),
            ))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemata_core::{validate, Mismatch, MismatchKind};

    fn digits() -> Schema {
        formatted_string(r"\d+").unwrap()
    }

    #[test]
    fn test_formatted_string_accepts_matching_string() {
        assert_eq!(
            validate(&digits(), &Value::from("112233")).unwrap(),
            Value::from("112233")
        );
    }

    #[test]
    fn test_formatted_string_stringifies_numbers() {
        assert_eq!(
            validate(&digits(), &Value::from(112233)).unwrap(),
            Value::from("112233")
        );
    }

    #[test]
    fn test_formatted_string_rejects_mismatch() {
        let err = validate(&digits(), &Value::from("not a digit")).unwrap_err();
        assert_eq!(err.kind(), MismatchKind::PredicateViolation);
        match err.mismatch() {
            Mismatch::Predicate { cause, .. } => assert_eq!(cause, "PatternMismatch"),
            other => panic!("Expected Predicate mismatch, got: {other}"),
        }
    }

    #[test]
    fn test_formatted_string_is_anchored() {
        assert!(validate(&digits(), &Value::from("12a")).is_err());
        assert!(validate(&digits(), &Value::from("a12")).is_err());
        // Alternation must not escape the anchors.
        let schema = formatted_string("a|b").unwrap();
        assert!(validate(&schema, &Value::from("ab")).is_err());
        assert!(validate(&schema, &Value::from("b")).is_ok());
    }

    #[test]
    fn test_formatted_string_invalid_pattern() {
        let err = formatted_string("(unclosed").unwrap_err();
        assert_eq!(err.pattern, "(unclosed");
        assert!(err.to_string().contains("invalid pattern"));
    }

    #[test]
    fn test_formatted_string_is_idempotent() {
        let once = validate(&digits(), &Value::from(42)).unwrap();
        let twice = validate(&digits(), &once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_date_string_accepts_dates_and_timestamps() {
        let schema = date_string();
        assert_eq!(
            validate(&schema, &Value::from("2024-05-01")).unwrap(),
            Value::from("2024-05-01")
        );
        assert!(validate(&schema, &Value::from("2024-05-01T12:30:00Z")).is_ok());
        assert!(validate(&schema, &Value::from("2024-05-01T12:30:00+05:30")).is_ok());
    }

    #[test]
    fn test_date_string_rejects_garbage() {
        let schema = date_string();
        for bad in ["yesterday", "2024-13-01", "2024-02-30"] {
            let err = validate(&schema, &Value::from(bad)).unwrap_err();
            assert_eq!(err.kind(), MismatchKind::PredicateViolation, "accepted {bad}");
        }
        assert!(validate(&schema, &Value::from(20240501)).is_err());
    }
}
