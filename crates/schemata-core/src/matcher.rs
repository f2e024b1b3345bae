//! # Matcher: Recursive Schema Matching
//!
//! [`validate`] walks a schema and a value together and returns the
//! matched value, coerced wherever a predicate transformed part of it.
//!
//! ## Dispatch
//!
//! One exhaustive `match` over the schema variant:
//!
//! 1. Type tag: the value must be an instance of the kind. No coercion.
//! 2. Predicate: the predicate's output becomes the result; a `Refused`
//!    rejection becomes a `PredicateViolation`, an `Exhausted` one an
//!    `AggregateMismatch`.
//! 3. Sequence templates: homogeneous (`[S]`) or positional
//!    (`[S1, .., Sn]`, length-strict, matched in index order).
//! 4. Mapping templates: `{K: V}` over every pair, or keyed mappings.
//! 5. Identity: the value is returned unchanged.
//!
//! The first mismatch aborts the traversal. The input is never mutated;
//! container results are rebuilt from their matched parts.

use crate::error::{MatchError, Mismatch, Rejection, Shape};
use crate::schema::Schema;
use crate::value::{render, type_name, Mapping, Value};

/// Match `value` against `schema`.
///
/// # Errors
///
/// Returns a [`MatchError`] describing the first mismatch found, with the
/// path from the root of `value` to the offending sub-value.
pub fn validate(schema: &Schema, value: &Value) -> Result<Value, MatchError> {
    match schema {
        Schema::Kind(kind) => {
            if kind.accepts(value) {
                Ok(value.clone())
            } else {
                Err(MatchError::new(Mismatch::Type {
                    expected: *kind,
                    found: type_name(value),
                    value: value.clone(),
                }))
            }
        }

        Schema::Predicate(predicate) => predicate.check(value).map_err(|rejection| {
            let mismatch = match rejection {
                Rejection::Refused { cause, message } => Mismatch::Predicate {
                    predicate: predicate.name().to_string(),
                    cause,
                    message,
                    value: value.clone(),
                },
                Rejection::Exhausted(attempts) => Mismatch::Aggregate {
                    attempts,
                    value: value.clone(),
                },
            };
            MatchError::new(mismatch)
        }),

        Schema::Sequence(element) => {
            let items = expect_sequence(value)?;
            let matched = items
                .iter()
                .enumerate()
                .map(|(i, item)| validate(element, item).map_err(|e| e.within(i)))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::Sequence(matched))
        }

        Schema::Positional(elements) => {
            let items = expect_sequence(value)?;
            if items.len() != elements.len() {
                return Err(MatchError::new(Mismatch::Length {
                    expected: elements.len(),
                    found: items.len(),
                    value: value.clone(),
                }));
            }
            let matched = elements
                .iter()
                .zip(items)
                .enumerate()
                .map(|(i, (element, item))| validate(element, item).map_err(|e| e.within(i)))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::Sequence(matched))
        }

        Schema::Mapping(key_schema, value_schema) => {
            let map = expect_mapping(value)?;
            let mut matched = Mapping::new();
            for (k, v) in map {
                let segment = key_segment(k);
                let key = validate(key_schema, k).map_err(|e| e.within(&segment))?;
                let val = validate(value_schema, v).map_err(|e| e.within(&segment))?;
                matched.insert(key, val);
            }
            Ok(Value::Mapping(matched))
        }

        Schema::Keyed(fields) => {
            let map = expect_mapping(value)?;
            let mut matched = Mapping::new();
            for (key, field_schema) in fields {
                let field = map.get(key).ok_or_else(|| {
                    MatchError::new(Mismatch::MissingKey { key: key.clone() })
                })?;
                let val = validate(field_schema, field).map_err(|e| e.within(key_segment(key)))?;
                matched.insert(key.clone(), val);
            }
            if let Some(extra) = map.keys().find(|k| !fields.iter().any(|(key, _)| key == *k)) {
                return Err(MatchError::new(Mismatch::UnexpectedKey { key: extra.clone() }));
            }
            Ok(Value::Mapping(matched))
        }

        Schema::Identity => Ok(value.clone()),
    }
}

fn expect_sequence(value: &Value) -> Result<&Vec<Value>, MatchError> {
    match value {
        Value::Sequence(items) => Ok(items),
        other => Err(MatchError::new(Mismatch::Structure {
            expected: Shape::Sequence,
            found: type_name(other),
            value: other.clone(),
        })),
    }
}

fn expect_mapping(value: &Value) -> Result<&Mapping, MatchError> {
    match value {
        Value::Mapping(map) => Ok(map),
        other => Err(MatchError::new(Mismatch::Structure {
            expected: Shape::Mapping,
            found: type_name(other),
            value: other.clone(),
        })),
    }
}

/// Path segment for a mapping entry: string keys bare, others rendered.
fn key_segment(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => render(other),
    }
}
