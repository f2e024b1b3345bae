//! # schemata-guard: Validated Function Boundaries
//!
//! Wraps ordinary functions so their arguments and return value are
//! checked against declared schemas, but only when a [`Gate`] says so.
//! With the gate closed the wrapper adds nothing but the gate check.
//!
//! ## Pieces
//!
//! - [`Gate`]: zero-argument check evaluated once per call, never cached.
//!   Stock gates: [`Gate::always`] and [`Gate::when_debugging`], plus
//!   runtime toggles ([`Gate::flag`], [`Gate::env`]).
//! - [`Validator`]: one schema bound to a subject label ("input to
//!   function f"). Usable on its own for data outside function calls.
//! - [`Args`]: the call's positional and keyword arguments as values.
//! - [`Guard`]: reusable configuration (gate, coercion, schemas) that
//!   wraps any number of functions into [`Validated`] ones.
//! - [`GuardConfig`]: the same configuration loaded from YAML or the
//!   environment.
//!
//! ## Call Protocol
//!
//! 1. Closed gate: call the inner function with the original arguments.
//! 2. Open gate: normalize and validate the arguments, call the inner
//!    function with the (possibly coerced) arguments, then validate its
//!    result. A failed input check means the inner function never runs.
//!
//! Failures surface as a single [`BoundaryError`] naming the phase, the
//! function, the schema, and the offending value, with the underlying
//! [`MatchError`](schemata_core::MatchError) as its source.

pub mod args;
pub mod config;
pub mod gate;
pub mod validator;
pub mod wrapper;

pub use args::Args;
pub use config::{ConfigError, GateMode, GuardConfig};
pub use gate::Gate;
pub use validator::{BoundaryError, Phase, Subject, Validator};
pub use wrapper::{Guard, Validated};
