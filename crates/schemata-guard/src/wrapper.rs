//! # Wrapper: Gated Validation Around a Call
//!
//! A [`Guard`] holds the configuration shared by every function it wraps:
//! the gate, whether coerced values are passed on, and the input and
//! output schemas. [`Guard::wrap`] binds it to one function and returns a
//! [`Validated`] function.
//!
//! ## Input Normalization
//!
//! The call's arguments are folded into one matchable value. The first
//! applicable rule wins:
//!
//! | Arguments | Matched value | Result becomes |
//! |-----------|---------------|----------------|
//! | positional and keyword | `[p1, .., pn, {kw}]` | all but last → positional, last → keyword |
//! | keyword only | `{kw}` | keyword |
//! | two or more positional | `[p1, .., pn]` | positional |
//! | exactly one positional | `p1` | the single positional argument |
//! | none | nothing is matched | no arguments |

use std::fmt;

use schemata_core::{type_name, Mapping, Mismatch, Schema, Shape, Value};

use crate::args::Args;
use crate::config::GuardConfig;
use crate::gate::Gate;
use crate::validator::{BoundaryError, Subject, Validator};

/// Reusable validation settings for wrapping functions.
#[derive(Debug, Clone)]
pub struct Guard {
    gate: Gate,
    coerce_data: bool,
    input: Schema,
    output: Schema,
}

impl Guard {
    /// Guard using `gate`, coercing, with identity schemas on both sides.
    pub fn new(gate: Gate) -> Self {
        Self {
            gate,
            coerce_data: true,
            input: Schema::Identity,
            output: Schema::Identity,
        }
    }

    /// Guard with the gate and coercion settings of `config`.
    pub fn from_config(config: &GuardConfig) -> Self {
        Self::new(config.gate()).coerce_data(config.coerce_data)
    }

    pub fn coerce_data(mut self, coerce_data: bool) -> Self {
        self.coerce_data = coerce_data;
        self
    }

    /// Schema for the normalized arguments.
    pub fn input(mut self, schema: impl Into<Schema>) -> Self {
        self.input = schema.into();
        self
    }

    /// Schema for the return value.
    pub fn output(mut self, schema: impl Into<Schema>) -> Self {
        self.output = schema.into();
        self
    }

    /// Wrap `func`, reporting failures under `name`.
    pub fn wrap<F>(&self, name: impl Into<String>, func: F) -> Validated<F>
    where
        F: Fn(Args) -> Value,
    {
        let name = name.into();
        Validated {
            input: Validator::new(self.input.clone(), Subject::Input {
                function: name.clone(),
            })
            .coerce_data(self.coerce_data),
            output: Validator::new(self.output.clone(), Subject::Output {
                function: name.clone(),
            })
            .coerce_data(self.coerce_data),
            gate: self.gate.clone(),
            name,
            func,
        }
    }
}

impl Default for Guard {
    fn default() -> Self {
        Self::new(Gate::default())
    }
}

/// A function whose calls are validated while its gate is open.
pub struct Validated<F> {
    name: String,
    gate: Gate,
    input: Validator,
    output: Validator,
    func: F,
}

impl<F> Validated<F>
where
    F: Fn(Args) -> Value,
{
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Call the wrapped function.
    ///
    /// # Errors
    ///
    /// Returns a [`BoundaryError`] with phase `Input` if the arguments do
    /// not match the input schema (the function is not called), or with
    /// phase `Output` if its return value does not match the output schema.
    /// With the gate closed this never fails.
    pub fn call(&self, args: Args) -> Result<Value, BoundaryError> {
        if !self.gate.is_open() {
            tracing::trace!(function = %self.name, "validation gate closed, calling through");
            return Ok((self.func)(args));
        }

        tracing::debug!(function = %self.name, "validating call");
        let args = validate_input(&self.input, args).map_err(|e| {
            tracing::warn!(function = %self.name, phase = "input", error = %e, "call rejected");
            e
        })?;
        let result = (self.func)(args);
        self.output.validate(result).map_err(|e| {
            tracing::warn!(function = %self.name, phase = "output", error = %e, "result rejected");
            e
        })
    }
}

impl<F> fmt::Debug for Validated<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validated")
            .field("name", &self.name)
            .field("gate", &self.gate)
            .field("input", self.input.schema())
            .field("output", self.output.schema())
            .finish()
    }
}

/// Validate the arguments under the normalization rules in the module docs.
fn validate_input(validator: &Validator, args: Args) -> Result<Args, BoundaryError> {
    let Args {
        positional,
        keyword,
    } = args;

    match (positional.len(), keyword.is_empty()) {
        (0, true) => Ok(Args::new()),

        (0, false) => {
            let keyword = expect_mapping(validator, validator.validate(Value::Mapping(keyword))?)?;
            Ok(Args {
                positional: Vec::new(),
                keyword,
            })
        }

        (1, true) => {
            let validated = positional
                .into_iter()
                .map(|single| validator.validate(single))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Args {
                positional: validated,
                keyword: Mapping::new(),
            })
        }

        (_, true) => {
            let positional = expect_sequence(validator, validator.validate(Value::Sequence(positional))?)?;
            Ok(Args {
                positional,
                keyword: Mapping::new(),
            })
        }

        (_, false) => {
            let mut combined = positional;
            combined.push(Value::Mapping(keyword));
            let mut items = expect_sequence(validator, validator.validate(Value::Sequence(combined))?)?;
            match items.pop() {
                Some(Value::Mapping(keyword)) => Ok(Args {
                    positional: items,
                    keyword,
                }),
                Some(last) => {
                    let mismatch = Mismatch::Structure {
                        expected: Shape::Mapping,
                        found: type_name(&last),
                        value: last.clone(),
                    };
                    items.push(last);
                    Err(validator.reject(Value::Sequence(items), mismatch))
                }
                None => Err(validator.reject(
                    Value::Sequence(items),
                    Mismatch::Length {
                        expected: 1,
                        found: 0,
                        value: Value::Sequence(Vec::new()),
                    },
                )),
            }
        }
    }
}

fn expect_sequence(validator: &Validator, value: Value) -> Result<Vec<Value>, BoundaryError> {
    match value {
        Value::Sequence(items) => Ok(items),
        other => {
            let mismatch = Mismatch::Structure {
                expected: Shape::Sequence,
                found: type_name(&other),
                value: other.clone(),
            };
            Err(validator.reject(other, mismatch))
        }
    }
}

fn expect_mapping(validator: &Validator, value: Value) -> Result<Mapping, BoundaryError> {
    match value {
        Value::Mapping(map) => Ok(map),
        other => {
            let mismatch = Mismatch::Structure {
                expected: Shape::Mapping,
                found: type_name(&other),
                value: other.clone(),
            };
            Err(validator.reject(other, mismatch))
        }
    }
}
