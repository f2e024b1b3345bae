//! # Validator: A Schema Bound to a Subject
//!
//! A [`Validator`] pairs a schema with the label used when reporting a
//! failure ("input to function f"), and decides whether the coerced or the
//! original value is handed back on success.

use std::fmt;

use schemata_core::{render, MatchError, Mismatch, Schema, Value};
use thiserror::Error;

/// Which side of a call a failure happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Input,
    Output,
}

/// What a validator is checking, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    /// Arguments of the named function.
    Input { function: String },
    /// Return value of the named function.
    Output { function: String },
    /// Free-form label for standalone validation.
    Named(String),
}

impl Subject {
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Subject::Input { .. } => Some(Phase::Input),
            Subject::Output { .. } => Some(Phase::Output),
            Subject::Named(_) => None,
        }
    }

    pub fn function(&self) -> Option<&str> {
        match self {
            Subject::Input { function } | Subject::Output { function } => Some(function.as_str()),
            Subject::Named(_) => None,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Input { function } => write!(f, "input to function {function}"),
            Subject::Output { function } => write!(f, "output from function {function}"),
            Subject::Named(label) => f.write_str(label),
        }
    }
}

impl From<&str> for Subject {
    fn from(label: &str) -> Self {
        Subject::Named(label.to_string())
    }
}

impl From<String> for Subject {
    fn from(label: String) -> Self {
        Subject::Named(label)
    }
}

/// A value was rejected at a validation boundary.
#[derive(Error, Debug)]
#[error("bad value provided for {subject} - error: {source} schema: {schema} value: {}", render(.value))]
pub struct BoundaryError {
    subject: Subject,
    schema: Schema,
    value: Value,
    #[source]
    source: MatchError,
}

impl BoundaryError {
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// `Input` or `Output` for wrapped functions, `None` for standalone
    /// validators.
    pub fn phase(&self) -> Option<Phase> {
        self.subject.phase()
    }

    pub fn function(&self) -> Option<&str> {
        self.subject.function()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The value as it was presented to the validator.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The underlying mismatch.
    pub fn cause(&self) -> &MatchError {
        &self.source
    }
}

/// One schema checked on behalf of one subject.
#[derive(Debug, Clone)]
pub struct Validator {
    schema: Schema,
    subject: Subject,
    coerce_data: bool,
}

impl Validator {
    /// Validator that hands back the coerced value on success.
    pub fn new(schema: impl Into<Schema>, subject: impl Into<Subject>) -> Self {
        Self {
            schema: schema.into(),
            subject: subject.into(),
            coerce_data: true,
        }
    }

    /// With `false`, the value is still checked but returned as supplied.
    pub fn coerce_data(mut self, coerce_data: bool) -> Self {
        self.coerce_data = coerce_data;
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Check `value` against the schema.
    ///
    /// # Errors
    ///
    /// Returns a [`BoundaryError`] wrapping the first mismatch.
    pub fn validate(&self, value: Value) -> Result<Value, BoundaryError> {
        match self.schema.validate(&value) {
            Ok(coerced) if self.coerce_data => Ok(coerced),
            Ok(_) => Ok(value),
            Err(source) => Err(self.error(value, source)),
        }
    }

    /// Reject `value` for a reason found outside the matcher.
    pub(crate) fn reject(&self, value: Value, mismatch: Mismatch) -> BoundaryError {
        self.error(value, MatchError::new(mismatch))
    }

    fn error(&self, value: Value, source: MatchError) -> BoundaryError {
        BoundaryError {
            subject: self.subject.clone(),
            schema: self.schema.clone(),
            value,
            source,
        }
    }
}
