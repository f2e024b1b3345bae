//! # Combinators: Null and Alternatives

use schemata_core::{render, validate, Attempt, Rejection, Schema, Value};

/// Accepts only the null value.
pub fn null() -> Schema {
    Schema::predicate("null", |value: &Value| match value {
        Value::Null => Ok(Value::Null),
        other => Err(Rejection::refused(
            "NotNull",
            format!("expected null, got {}", render(other)),
        )),
    })
}

/// Accepts a value matching any of `alternatives`, trying them in order.
///
/// The first alternative that matches supplies the result, including any
/// coercion it performs; later alternatives are not consulted even if they
/// would also match. When every alternative fails, the rejection lists
/// each one with the reason it failed.
pub fn or(alternatives: impl IntoIterator<Item = Schema>) -> Schema {
    let alternatives: Vec<Schema> = alternatives.into_iter().collect();
    let name = format!(
        "or({})",
        alternatives
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Schema::predicate(name, move |value: &Value| {
        let mut attempts = Vec::with_capacity(alternatives.len());
        for alternative in &alternatives {
            match validate(alternative, value) {
                Ok(matched) => return Ok(matched),
                Err(error) => attempts.push(Attempt {
                    schema: alternative.to_string(),
                    error,
                }),
            }
        }
        Err(Rejection::Exhausted(attempts))
    })
}

/// Accepts null, or a value matching `schema`.
pub fn nullable(schema: impl Into<Schema>) -> Schema {
    or([null(), schema.into()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemata_core::{Kind, Mismatch, MismatchKind};

    #[test]
    fn test_null_accepts_null() {
        assert_eq!(validate(&null(), &Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn test_null_rejects_string() {
        let err = validate(&null(), &Value::from("hello")).unwrap_err();
        assert_eq!(err.kind(), MismatchKind::PredicateViolation);
        assert!(err.to_string().contains("NotNull"));
    }

    #[test]
    fn test_or_allows_each_alternative() {
        let schema = or([Schema::int(), Schema::float()]);
        assert_eq!(validate(&schema, &Value::from(10)).unwrap(), Value::from(10));
        assert_eq!(validate(&schema, &Value::from(10.5)).unwrap(), Value::from(10.5));
    }

    #[test]
    fn test_or_names_every_attempt_on_failure() {
        let schema = or([Schema::int(), Schema::float()]);
        let err = validate(&schema, &Value::from("hello")).unwrap_err();
        assert_eq!(err.kind(), MismatchKind::AggregateMismatch);
        match err.mismatch() {
            Mismatch::Aggregate { attempts, value } => {
                let tried: Vec<&str> = attempts.iter().map(|a| a.schema.as_str()).collect();
                assert_eq!(tried, vec!["int", "float"]);
                assert!(attempts
                    .iter()
                    .all(|a| a.error.kind() == MismatchKind::TypeMismatch));
                assert_eq!(value, &Value::from("hello"));
            }
            other => panic!("Expected Aggregate, got: {other}"),
        }
    }

    #[test]
    fn test_or_first_match_wins() {
        let tag = |label: &'static str| {
            Schema::predicate(label, move |_: &Value| Ok(Value::from(label)))
        };
        let schema = or([tag("first"), tag("second")]);
        assert_eq!(validate(&schema, &Value::Null).unwrap(), Value::from("first"));
    }

    #[test]
    fn test_or_with_no_alternatives_rejects_everything() {
        let err = validate(&or(Vec::new()), &Value::from(1)).unwrap_err();
        assert_eq!(err.kind(), MismatchKind::AggregateMismatch);
    }

    #[test]
    fn test_or_display_lists_alternatives() {
        assert_eq!(or([Schema::int(), Schema::float()]).to_string(), "or(int, float)");
    }

    #[test]
    fn test_nullable() {
        let schema = nullable(Kind::Int);
        assert_eq!(validate(&schema, &Value::Null).unwrap(), Value::Null);
        assert_eq!(validate(&schema, &Value::from(3)).unwrap(), Value::from(3));
        let err = validate(&schema, &Value::from("3")).unwrap_err();
        assert_eq!(err.kind(), MismatchKind::AggregateMismatch);
    }

    #[test]
    fn test_nested_or_inside_sequence_reports_index() {
        let schema = Schema::seq_of(or([Schema::int(), Schema::str()]));
        let value = Value::Sequence(vec![Value::from(1), Value::from("a"), Value::Bool(true)]);
        let err = validate(&schema, &value).unwrap_err();
        assert_eq!(err.path(), "/2");
        assert_eq!(err.kind(), MismatchKind::AggregateMismatch);
    }
}
