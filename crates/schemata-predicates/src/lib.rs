//! # schemata-predicates: Predicate Library
//!
//! Ready-made predicate schemas built on the matcher's predicate extension
//! point. Each constructor returns a [`Schema`](schemata_core::Schema), so
//! predicates nest anywhere a schema is accepted:
//!
//! - [`null`]: only the null value.
//! - [`or`]: the first alternative that matches wins, in the given order.
//! - [`nullable`]: null, or the given schema.
//! - [`enum_of`]: membership in a fixed set of literals.
//! - [`formatted_string`]: stringify, then require a full-string regex match.
//! - [`date_string`]: stringify, then require an RFC 3339 timestamp or a
//!   `YYYY-MM-DD` date.
//!
//! ## Crate Policy
//!
//! - Depends only on `schemata-core` internally.
//! - Predicates are pure: they never log and never hold mutable state.

pub mod combinators;
pub mod format;
pub mod membership;

pub use combinators::{null, nullable, or};
pub use format::{date_string, formatted_string, PatternError};
pub use membership::enum_of;
