//! # Value Model
//!
//! Data flowing through the matcher is a [`serde_yaml::Value`]. Unlike a
//! JSON value tree it carries mappings with arbitrary keys, so a mapping
//! template such as `{int: str}` can be expressed and checked. Mapping
//! equality ignores entry order; iteration follows insertion order.
//!
//! This module also provides the two textual projections used across the
//! workspace:
//!
//! - [`render`]: inline, single-line form used in error messages and
//!   schema display (`"hello"`, `[1, 2]`, `{1: "hello"}`).
//! - [`stringify`]: the string coercion applied by format predicates.
//!   Strings pass through untouched; everything else uses its rendered form.

pub use serde_yaml::{Mapping, Value};

/// Convert a `serde_json::Value` into the matcher's value model.
///
/// JSON is a strict subset of what [`Value`] can hold, so the conversion
/// cannot fail. Integers stay integers; every other number becomes a float.
pub fn from_json(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else {
                Value::Number(n.as_f64().unwrap_or(f64::NAN).into())
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            Value::Sequence(items.into_iter().map(from_json).collect())
        }
        serde_json::Value::Object(map) => {
            let mut mapping = Mapping::new();
            for (k, v) in map {
                mapping.insert(Value::String(k), from_json(v));
            }
            Value::Mapping(mapping)
        }
    }
}

/// Short type name of a value, as reported in type mismatches.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

/// Render a value on a single line.
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    write_inline(&mut out, value);
    out
}

/// String coercion used by format predicates.
///
/// `"abc"` stays `abc` (no quotes), `112233` becomes `112233`, `true`
/// becomes `true`, `null` becomes `null`. Containers use [`render`].
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => render(other),
    }
}

fn write_inline(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(&format!("{s:?}")),
        Value::Sequence(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_inline(out, item);
            }
            out.push(']');
        }
        Value::Mapping(map) => {
            out.push('{');
            for (i, (k, v)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_inline(out, k);
                out.push_str(": ");
                write_inline(out, v);
            }
            out.push('}');
        }
        Value::Tagged(tagged) => {
            out.push_str(&tagged.tag.to_string());
            out.push(' ');
            write_inline(out, &tagged.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_scalars() {
        assert_eq!(render(&Value::Null), "null");
        assert_eq!(render(&Value::Bool(true)), "true");
        assert_eq!(render(&Value::from(5)), "5");
        assert_eq!(render(&Value::from(10.5)), "10.5");
        assert_eq!(render(&Value::from("hello")), "\"hello\"");
    }

    #[test]
    fn test_render_nested_containers() {
        let mut map = Mapping::new();
        map.insert(Value::from(1), Value::from("hello"));
        map.insert(Value::from(2), Value::Sequence(vec![Value::from(1), Value::Null]));
        assert_eq!(render(&Value::Mapping(map)), r#"{1: "hello", 2: [1, null]}"#);
    }

    #[test]
    fn test_stringify_leaves_strings_unquoted() {
        assert_eq!(stringify(&Value::from("abc")), "abc");
        assert_eq!(stringify(&Value::from(112233)), "112233");
        assert_eq!(stringify(&Value::from(false)), "false");
    }

    #[test]
    fn test_type_name_distinguishes_int_and_float() {
        assert_eq!(type_name(&Value::from(1)), "int");
        assert_eq!(type_name(&Value::from(1.5)), "float");
        assert_eq!(type_name(&Value::from(true)), "bool");
    }

    #[test]
    fn test_from_json_conversion() {
        let value = from_json(json!({
            "count": 42,
            "ratio": 0.25,
            "enabled": true,
            "items": ["one", "two"],
            "missing": null
        }));
        assert_eq!(value["count"], Value::from(42));
        assert_eq!(value["ratio"], Value::from(0.25));
        assert_eq!(value["enabled"], Value::Bool(true));
        assert_eq!(value["items"][0], Value::from("one"));
        assert_eq!(value["missing"], Value::Null);
    }

    #[test]
    fn test_from_json_large_unsigned() {
        let value = from_json(json!(u64::MAX));
        assert_eq!(value, Value::from(u64::MAX));
        assert_eq!(type_name(&value), "int");
    }
}
