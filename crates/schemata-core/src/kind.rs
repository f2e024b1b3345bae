//! # Kind: Primitive Type Tags
//!
//! A [`Kind`] is the scalar branch of a schema: it matches when the value
//! is an instance of that kind, and it never coerces.

use std::fmt;

use crate::value::Value;

/// Primitive kind a type-tag schema checks for.
///
/// `Int` accepts integral numbers only and `Float` accepts only float
/// representations, so `10` is not a `Float` and `10.5` is not an `Int`.
/// Use `Number` to accept both. Booleans are never numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Float,
    Number,
    Str,
    Sequence,
    Mapping,
}

impl Kind {
    /// Returns true if `value` is an instance of this kind.
    pub fn accepts(self, value: &Value) -> bool {
        match (self, value) {
            (Kind::Null, Value::Null) => true,
            (Kind::Bool, Value::Bool(_)) => true,
            (Kind::Int, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (Kind::Float, Value::Number(n)) => n.is_f64(),
            (Kind::Number, Value::Number(_)) => true,
            (Kind::Str, Value::String(_)) => true,
            (Kind::Sequence, Value::Sequence(_)) => true,
            (Kind::Mapping, Value::Mapping(_)) => true,
            _ => false,
        }
    }

    /// Name used when displaying schemas and errors.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Number => "number",
            Kind::Str => "str",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
