//! # Call Arguments
//!
//! [`Args`] carries a call's positional and keyword arguments as values,
//! which is what the input schema is matched against. How the two parts
//! are combined into a single matchable value is decided in
//! [`crate::wrapper`].

use schemata_core::{Mapping, Value};
use serde::Serialize;

/// Positional and keyword arguments of one call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub positional: Vec<Value>,
    pub keyword: Mapping,
}

impl Args {
    /// No arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positional arguments only.
    pub fn positional<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            keyword: Mapping::new(),
        }
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Add or replace a keyword argument.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.insert(Value::String(name.into()), value.into());
        self
    }

    /// Build arguments from any serializable value.
    ///
    /// Tuples and sequences become positional arguments, structs and maps
    /// become keyword arguments, `()` becomes no arguments, and any other
    /// value becomes a single positional argument. A lone null argument
    /// has to be passed with [`Args::arg`] instead.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `args` cannot be represented.
    pub fn from_serialize<T: Serialize + ?Sized>(args: &T) -> Result<Self, serde_yaml::Error> {
        Ok(match serde_yaml::to_value(args)? {
            Value::Null => Self::new(),
            Value::Sequence(items) => Self {
                positional: items,
                keyword: Mapping::new(),
            },
            Value::Mapping(keyword) => Self {
                positional: Vec::new(),
                keyword,
            },
            single => Self::new().arg(single),
        })
    }

    /// True when there are neither positional nor keyword arguments.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Point {
        x: i64,
        y: i64,
    }

    #[test]
    fn test_builder() {
        let args = Args::new().arg(1).arg("two").kwarg("flag", true);
        assert_eq!(args.positional, vec![Value::from(1), Value::from("two")]);
        assert_eq!(args.keyword.get("flag"), Some(&Value::Bool(true)));
        assert!(!args.is_empty());
        assert!(Args::new().is_empty());
    }

    #[test]
    fn test_from_serialize_tuple_is_positional() {
        let args = Args::from_serialize(&(1, "a", 2.5)).unwrap();
        assert_eq!(args.positional.len(), 3);
        assert!(args.keyword.is_empty());
    }

    #[test]
    fn test_from_serialize_struct_is_keyword() {
        let args = Args::from_serialize(&Point { x: 1, y: 2 }).unwrap();
        assert!(args.positional.is_empty());
        assert_eq!(args.keyword.get("y"), Some(&Value::from(2)));
    }

    #[test]
    fn test_from_serialize_scalar_and_unit() {
        assert_eq!(Args::from_serialize(&7).unwrap(), Args::positional([7]));
        assert!(Args::from_serialize(&()).unwrap().is_empty());
    }
}
