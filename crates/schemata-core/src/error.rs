//! # Error Types: Mismatch Taxonomy
//!
//! Defines the structured errors produced by the matcher and the
//! [`Rejection`] a predicate returns when it refuses a value.
//!
//! ## Design
//!
//! - Every mismatch records the offending value and what was expected.
//! - [`MatchError`] adds the location of the mismatch relative to the root
//!   value, rendered JSON-pointer style (`/1/name`, `(root)` when empty).
//! - [`MismatchKind`] is the coarse classification callers branch on.

use std::fmt;

use thiserror::Error;

use crate::kind::Kind;
use crate::value::{render, Value};

/// Coarse classification of a mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MismatchKind {
    /// The value's runtime type does not match a type-tag schema.
    TypeMismatch,
    /// A positional template and the value differ in length.
    LengthMismatch,
    /// The value is not the container shape the schema requires.
    StructuralMismatch,
    /// A predicate schema refused the value.
    PredicateViolation,
    /// Every alternative of an `or` schema failed.
    AggregateMismatch,
}

impl MismatchKind {
    /// Name of the classification, e.g. `"TypeMismatch"`.
    pub fn as_str(self) -> &'static str {
        match self {
            MismatchKind::TypeMismatch => "TypeMismatch",
            MismatchKind::LengthMismatch => "LengthMismatch",
            MismatchKind::StructuralMismatch => "StructuralMismatch",
            MismatchKind::PredicateViolation => "PredicateViolation",
            MismatchKind::AggregateMismatch => "AggregateMismatch",
        }
    }
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Container shape a schema required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Sequence,
    Mapping,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Sequence => f.write_str("sequence"),
            Shape::Mapping => f.write_str("mapping"),
        }
    }
}

/// Detail of a single mismatch, independent of where it happened.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Mismatch {
    /// The value is not an instance of the expected kind.
    #[error("expected {expected}, got {found} {}", render(.value))]
    Type {
        /// Kind the schema required.
        expected: Kind,
        /// Type name of the value that was supplied.
        found: &'static str,
        /// The offending value.
        value: Value,
    },

    /// A positional template of length `expected` met a sequence of
    /// length `found`.
    #[error("expected a sequence of exactly {expected} elements, got {found}: {}", render(.value))]
    Length {
        expected: usize,
        found: usize,
        value: Value,
    },

    /// The value is not a container of the required shape.
    #[error("expected a {expected}, got {found} {}", render(.value))]
    Structure {
        expected: Shape,
        found: &'static str,
        value: Value,
    },

    /// A keyed mapping template names a key the value lacks.
    #[error("missing required key {}", render(.key))]
    MissingKey { key: Value },

    /// The value carries a key a keyed mapping template does not name.
    #[error("unexpected key {}", render(.key))]
    UnexpectedKey { key: Value },

    /// A predicate schema refused the value.
    #[error("{predicate} rejected {}: {cause}: {message}", render(.value))]
    Predicate {
        /// Display name of the predicate.
        predicate: String,
        /// Short classification supplied by the predicate.
        cause: String,
        /// Human-readable reason.
        message: String,
        value: Value,
    },

    /// Every alternative of an `or` schema failed.
    #[error("no alternative matched {}: {}", render(.value), AttemptList(.attempts))]
    Aggregate {
        attempts: Vec<Attempt>,
        value: Value,
    },
}

impl Mismatch {
    /// Coarse classification of this mismatch.
    pub fn kind(&self) -> MismatchKind {
        match self {
            Mismatch::Type { .. } => MismatchKind::TypeMismatch,
            Mismatch::Length { .. } => MismatchKind::LengthMismatch,
            Mismatch::Structure { .. }
            | Mismatch::MissingKey { .. }
            | Mismatch::UnexpectedKey { .. } => MismatchKind::StructuralMismatch,
            Mismatch::Predicate { .. } => MismatchKind::PredicateViolation,
            Mismatch::Aggregate { .. } => MismatchKind::AggregateMismatch,
        }
    }
}

/// One failed alternative of an `or` schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    /// Display form of the alternative that was tried.
    pub schema: String,
    /// Why it failed.
    pub error: MatchError,
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.schema, self.error)
    }
}

struct AttemptList<'a>(&'a [Attempt]);

impl fmt::Display for AttemptList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attempt) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{attempt}")?;
        }
        Ok(())
    }
}

/// A mismatch together with its location in the validated value.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}: {mismatch}", PathDisplay(.segments))]
pub struct MatchError {
    /// Path segments, innermost first.
    segments: Vec<String>,
    mismatch: Mismatch,
}

impl MatchError {
    /// A mismatch at the root of the value being matched.
    pub fn new(mismatch: Mismatch) -> Self {
        Self {
            segments: Vec::new(),
            mismatch,
        }
    }

    /// Record that this error happened under `segment` of the parent value.
    ///
    /// Called while unwinding, so segments accumulate innermost first.
    pub fn within(mut self, segment: impl fmt::Display) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Coarse classification of the mismatch.
    pub fn kind(&self) -> MismatchKind {
        self.mismatch.kind()
    }

    /// Structured detail.
    pub fn mismatch(&self) -> &Mismatch {
        &self.mismatch
    }

    /// JSON-pointer style path to the offending value, empty at the root.
    pub fn path(&self) -> String {
        self.segments
            .iter()
            .rev()
            .map(|s| format!("/{s}"))
            .collect()
    }
}

struct PathDisplay<'a>(&'a [String]);

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(root)");
        }
        for segment in self.0.iter().rev() {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

/// Failure returned by a predicate schema.
///
/// The matcher turns `Refused` into a `PredicateViolation` and `Exhausted`
/// into an `AggregateMismatch`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    /// The predicate refused the value.
    #[error("{cause}: {message}")]
    Refused {
        /// Short classification, e.g. `"PatternMismatch"`.
        cause: String,
        /// Human-readable reason.
        message: String,
    },

    /// Every alternative tried by the predicate failed.
    #[error("no alternative matched: {}", AttemptList(.0))]
    Exhausted(Vec<Attempt>),
}

impl Rejection {
    /// Shorthand for [`Rejection::Refused`].
    pub fn refused(cause: impl Into<String>, message: impl Into<String>) -> Self {
        Rejection::Refused {
            cause: cause.into(),
            message: message.into(),
        }
    }
}

/// Lets a predicate run the matcher on a sub-value and propagate with `?`.
impl From<MatchError> for Rejection {
    fn from(err: MatchError) -> Self {
        Rejection::Refused {
            cause: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}
