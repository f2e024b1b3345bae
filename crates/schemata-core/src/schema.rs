//! # Schema: Declarative Shape Templates
//!
//! A [`Schema`] describes the expected shape of a value. It is built once,
//! usually where the validated function is defined, and then shared across
//! many validations. Schemas are never mutated by matching.
//!
//! | Variant | Written as | Matches |
//! |---------|------------|---------|
//! | `Kind(Int)` | `int` | an instance of that kind |
//! | `Sequence(S)` | `[S]` | any sequence whose every element matches `S` |
//! | `Positional([S1..Sn])` | `[S1, .., Sn]` | a sequence of exactly `n` elements, pairwise |
//! | `Mapping(K, V)` | `{K: V}` | any mapping whose keys match `K` and values match `V` |
//! | `Keyed([(k, S)..])` | `{"a": S, ..}` | a mapping with exactly the named keys |
//! | `Predicate(f)` | `name(..)` | whatever `f` accepts, replaced by what it returns |
//! | `Identity` | `identity` | anything, unchanged |
//!
//! Cyclic schemas cannot be built from these constructors; the matcher
//! recurses once per nesting level.

use std::fmt;
use std::sync::Arc;

use crate::error::{MatchError, Rejection};
use crate::kind::Kind;
use crate::matcher;
use crate::value::{render, Value};

type CheckFn = dyn Fn(&Value) -> Result<Value, Rejection> + Send + Sync;

/// A named, reusable check-and-coerce function.
///
/// Returns the (possibly transformed) value on success and a [`Rejection`]
/// explaining the refusal otherwise. Cloning is cheap; the function is
/// shared.
#[derive(Clone)]
pub struct Predicate {
    name: Arc<str>,
    check: Arc<CheckFn>,
}

impl Predicate {
    /// Wrap `check` under a display name such as `enum("a", "b")`.
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, Rejection> + Send + Sync + 'static,
    {
        let name: String = name.into();
        Self {
            name: Arc::from(name),
            check: Arc::new(check),
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the predicate against a value.
    pub fn check(&self, value: &Value) -> Result<Value, Rejection> {
        (self.check)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.name).finish()
    }
}

/// Expected shape of a value.
#[derive(Debug, Clone, Default)]
pub enum Schema {
    /// Primitive type tag.
    Kind(Kind),
    /// Homogeneous sequence template `[S]`.
    Sequence(Box<Schema>),
    /// Positional, length-strict sequence template `[S1, .., Sn]`.
    Positional(Vec<Schema>),
    /// Mapping template `{K: V}`.
    Mapping(Box<Schema>, Box<Schema>),
    /// Mapping with a fixed set of named keys, each with its own schema.
    Keyed(Vec<(Value, Schema)>),
    /// Check-and-coerce function.
    Predicate(Predicate),
    /// Accepts anything unchanged.
    #[default]
    Identity,
}

impl Schema {
    pub fn kind(kind: Kind) -> Self {
        Schema::Kind(kind)
    }

    pub fn null() -> Self {
        Schema::Kind(Kind::Null)
    }

    pub fn bool() -> Self {
        Schema::Kind(Kind::Bool)
    }

    pub fn int() -> Self {
        Schema::Kind(Kind::Int)
    }

    pub fn float() -> Self {
        Schema::Kind(Kind::Float)
    }

    pub fn number() -> Self {
        Schema::Kind(Kind::Number)
    }

    pub fn str() -> Self {
        Schema::Kind(Kind::Str)
    }

    pub fn identity() -> Self {
        Schema::Identity
    }

    /// Homogeneous sequence: every element must match `element`.
    pub fn seq_of(element: impl Into<Schema>) -> Self {
        Schema::Sequence(Box::new(element.into()))
    }

    /// Positional sequence: exactly `elements.len()` elements, pairwise.
    pub fn positional(elements: impl IntoIterator<Item = Schema>) -> Self {
        Schema::Positional(elements.into_iter().collect())
    }

    /// Mapping template: every key matches `key`, every value matches `value`.
    pub fn map_of(key: impl Into<Schema>, value: impl Into<Schema>) -> Self {
        Schema::Mapping(Box::new(key.into()), Box::new(value.into()))
    }

    /// Keyed mapping: each named key must be present and match its schema,
    /// and no other keys may appear.
    pub fn keyed<K>(fields: impl IntoIterator<Item = (K, Schema)>) -> Self
    where
        K: Into<Value>,
    {
        Schema::Keyed(fields.into_iter().map(|(k, s)| (k.into(), s)).collect())
    }

    /// Predicate schema from a name and a check function.
    pub fn predicate<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, Rejection> + Send + Sync + 'static,
    {
        Schema::Predicate(Predicate::new(name, check))
    }

    /// Interpret a literal sequence of schemas the way a template is read:
    /// one element is a homogeneous template, anything else positional.
    pub fn template(mut elements: Vec<Schema>) -> Self {
        if elements.len() == 1 {
            Schema::Sequence(Box::new(elements.remove(0)))
        } else {
            Schema::Positional(elements)
        }
    }

    /// Match `value` against this schema. See [`crate::validate`].
    pub fn validate(&self, value: &Value) -> Result<Value, MatchError> {
        matcher::validate(self, value)
    }
}

impl From<Kind> for Schema {
    fn from(kind: Kind) -> Self {
        Schema::Kind(kind)
    }
}

impl From<Predicate> for Schema {
    fn from(predicate: Predicate) -> Self {
        Schema::Predicate(predicate)
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Kind(kind) => write!(f, "{kind}"),
            Schema::Sequence(element) => write!(f, "[{element}]"),
            Schema::Positional(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Schema::Mapping(key, value) => write!(f, "{{{key}: {value}}}"),
            Schema::Keyed(fields) => {
                f.write_str("{")?;
                for (i, (key, schema)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {schema}", render(key))?;
                }
                f.write_str("}")
            }
            Schema::Predicate(predicate) => f.write_str(predicate.name()),
            Schema::Identity => f.write_str("identity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_templates() {
        assert_eq!(Schema::int().to_string(), "int");
        assert_eq!(Schema::seq_of(Kind::Int).to_string(), "[int]");
        assert_eq!(
            Schema::positional([Schema::int(), Schema::str()]).to_string(),
            "[int, str]"
        );
        assert_eq!(Schema::map_of(Kind::Int, Kind::Str).to_string(), "{int: str}");
        assert_eq!(
            Schema::keyed([("name", Schema::str()), ("age", Schema::int())]).to_string(),
            r#"{"name": str, "age": int}"#
        );
        assert_eq!(Schema::default().to_string(), "identity");
    }

    #[test]
    fn test_template_single_element_is_homogeneous() {
        match Schema::template(vec![Schema::int()]) {
            Schema::Sequence(element) => assert!(matches!(*element, Schema::Kind(Kind::Int))),
            other => panic!("Expected Sequence, got: {other}"),
        }
    }

    #[test]
    fn test_template_multi_and_empty_are_positional() {
        assert!(matches!(
            Schema::template(vec![Schema::int(), Schema::int()]),
            Schema::Positional(ref e) if e.len() == 2
        ));
        assert!(matches!(
            Schema::template(vec![]),
            Schema::Positional(ref e) if e.is_empty()
        ));
    }

    #[test]
    fn test_predicate_display_and_debug_use_name() {
        let schema = Schema::predicate("positive", |v: &Value| Ok(v.clone()));
        assert_eq!(schema.to_string(), "positive");
        assert!(format!("{schema:?}").contains("positive"));
    }
}
