//! # Gates: When Validation Runs
//!
//! A [`Gate`] is consulted at the start of every wrapped call. Its answer
//! is never cached, so flipping a flag between two calls takes effect on
//! the second one.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type GateFn = dyn Fn() -> bool + Send + Sync;

/// Zero-argument check deciding whether a call is validated.
#[derive(Clone)]
pub struct Gate {
    label: &'static str,
    check: Arc<GateFn>,
}

impl Gate {
    /// Gate backed by an arbitrary check. It must be cheap and side-effect
    /// free; it runs once per call.
    pub fn from_fn<F>(check: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Self {
            label: "custom",
            check: Arc::new(check),
        }
    }

    /// Validate every call.
    pub fn always() -> Self {
        Self {
            label: "always",
            check: Arc::new(|| true),
        }
    }

    /// Validate nothing.
    pub fn never() -> Self {
        Self {
            label: "never",
            check: Arc::new(|| false),
        }
    }

    /// Validate only in builds with debug assertions enabled.
    pub fn when_debugging() -> Self {
        Self {
            label: "when_debugging",
            check: Arc::new(|| cfg!(debug_assertions)),
        }
    }

    /// Validate while `flag` is set. The flag is read on every call.
    pub fn flag(flag: Arc<AtomicBool>) -> Self {
        Self {
            label: "flag",
            check: Arc::new(move || flag.load(Ordering::Relaxed)),
        }
    }

    /// Validate while the environment variable `var` holds a true switch
    /// value (`1`, `true`, `yes`, `on`). Unset or unrecognized means off.
    pub fn env(var: impl Into<String>) -> Self {
        let var = var.into();
        Self {
            label: "env",
            check: Arc::new(move || {
                std::env::var(&var)
                    .ok()
                    .and_then(|raw| parse_switch(&raw))
                    .unwrap_or(false)
            }),
        }
    }

    /// Evaluate the gate now.
    pub fn is_open(&self) -> bool {
        (self.check)()
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::when_debugging()
    }
}

impl fmt::Debug for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Gate").field(&self.label).finish()
    }
}

/// Parse an on/off switch value, case-insensitively.
pub(crate) fn parse_switch(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_gates() {
        assert!(Gate::always().is_open());
        assert!(!Gate::never().is_open());
        assert_eq!(Gate::when_debugging().is_open(), cfg!(debug_assertions));
    }

    #[test]
    fn test_flag_gate_is_reread_every_call() {
        let flag = Arc::new(AtomicBool::new(false));
        let gate = Gate::flag(Arc::clone(&flag));
        assert!(!gate.is_open());
        flag.store(true, Ordering::Relaxed);
        assert!(gate.is_open());
        flag.store(false, Ordering::Relaxed);
        assert!(!gate.is_open());
    }

    #[test]
    fn test_env_gate() {
        let var = "SCHEMATA_TEST_GATE_ENV";
        let gate = Gate::env(var);
        std::env::remove_var(var);
        assert!(!gate.is_open());
        std::env::set_var(var, "Yes");
        assert!(gate.is_open());
        std::env::set_var(var, "maybe");
        assert!(!gate.is_open());
        std::env::remove_var(var);
    }

    #[test]
    fn test_from_fn_and_debug() {
        let gate = Gate::from_fn(|| true);
        assert!(gate.is_open());
        assert_eq!(format!("{gate:?}"), r#"Gate("custom")"#);
    }

    #[test]
    fn test_parse_switch() {
        assert_eq!(parse_switch(" ON "), Some(true));
        assert_eq!(parse_switch("0"), Some(false));
        assert_eq!(parse_switch(""), None);
    }
}
