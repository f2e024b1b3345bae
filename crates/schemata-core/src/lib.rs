//! # schemata-core: Schema Matching Kernel
//!
//! This crate is the leaf of the schemata workspace. It defines the value
//! model, the `Schema` sum type, the mismatch taxonomy, and the recursive
//! matcher that checks (and optionally coerces) a value against a schema.
//! Every other crate in the workspace depends on `schemata-core`; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One sum type for schemas.** Scalar type tags, homogeneous and
//!    positional sequence templates, mapping templates, keyed mappings,
//!    predicates, and identity are all variants of [`Schema`]. The matcher
//!    is a single exhaustive `match` over it.
//!
//! 2. **Predicates return results.** A predicate is a named
//!    `Fn(&Value) -> Result<Value, Rejection>`. The matcher translates a
//!    [`Rejection`] into its own classified [`MatchError`] at the level
//!    where it happened.
//!
//! 3. **Pure matching.** [`validate`] never mutates its input and holds no
//!    state. Coerced values are freshly built.
//!
//! 4. **Fail fast.** The first mismatch aborts the traversal. There is no
//!    partial result and no multi-error collection.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `schemata-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod kind;
pub mod matcher;
pub mod schema;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::{Attempt, MatchError, Mismatch, MismatchKind, Rejection, Shape};
pub use kind::Kind;
pub use matcher::validate;
pub use schema::{Predicate, Schema};
pub use value::{from_json, render, stringify, type_name, Mapping, Value};
