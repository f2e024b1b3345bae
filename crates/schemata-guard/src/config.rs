//! # Configuration
//!
//! [`GuardConfig`] selects the gate and the coercion mode without touching
//! code. It deserializes from YAML:
//!
//! ```yaml
//! gate: always        # always | debug | never
//! coerce_data: false
//! ```
//!
//! or is read from the environment by [`GuardConfig::from_env`]:
//!
//! - `SCHEMATA_VALIDATION`: `always`, `debug`, `never`, or `env:<VAR>`
//!   to defer to another variable on every call. Default `debug`.
//! - `SCHEMATA_COERCE`: `true`/`false` (also `1`/`0`, `yes`/`no`,
//!   `on`/`off`). Default `true`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gate::{parse_switch, Gate};

/// Environment variable selecting the gate.
pub const VALIDATION_VAR: &str = "SCHEMATA_VALIDATION";

/// Environment variable selecting coercion.
pub const COERCE_VAR: &str = "SCHEMATA_COERCE";

/// Error loading a [`GuardConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The YAML document could not be parsed.
    #[error("invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An environment variable holds an unrecognized value.
    #[error("invalid value {value:?} for {var}: expected {expected}")]
    InvalidVar {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Which stock gate to use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GateMode {
    Always,
    #[default]
    Debug,
    Never,
    /// Open while the named environment variable holds a true switch value.
    Env(String),
}

/// Gate and coercion settings for a [`Guard`](crate::Guard).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    pub gate: GateMode,
    pub coerce_data: bool,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            gate: GateMode::Debug,
            coerce_data: true,
        }
    }
}

impl GuardConfig {
    /// Parse a YAML document. Missing fields take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read [`VALIDATION_VAR`] and [`COERCE_VAR`] from the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`GuardConfig::from_env`], with variables resolved by `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(VALIDATION_VAR) {
            config.gate = match raw.trim() {
                "always" => GateMode::Always,
                "debug" => GateMode::Debug,
                "never" => GateMode::Never,
                other => match other.strip_prefix("env:") {
                    Some(var) if !var.is_empty() => GateMode::Env(var.to_string()),
                    _ => {
                        return Err(ConfigError::InvalidVar {
                            var: VALIDATION_VAR,
                            value: raw.clone(),
                            expected: "always, debug, never, or env:<VAR>",
                        })
                    }
                },
            };
        }

        if let Some(raw) = lookup(COERCE_VAR) {
            config.coerce_data = parse_switch(&raw).ok_or_else(|| ConfigError::InvalidVar {
                var: COERCE_VAR,
                value: raw.clone(),
                expected: "a boolean switch",
            })?;
        }

        Ok(config)
    }

    /// Build the configured gate.
    pub fn gate(&self) -> Gate {
        match &self.gate {
            GateMode::Always => Gate::always(),
            GateMode::Debug => Gate::when_debugging(),
            GateMode::Never => Gate::never(),
            GateMode::Env(var) => Gate::env(var.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GuardConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, GuardConfig::default());
        assert_eq!(config.gate, GateMode::Debug);
        assert!(config.coerce_data);
    }

    #[test]
    fn test_from_lookup() {
        let config = GuardConfig::from_lookup(lookup(&[
            (VALIDATION_VAR, "always"),
            (COERCE_VAR, "off"),
        ]))
        .unwrap();
        assert_eq!(config.gate, GateMode::Always);
        assert!(!config.coerce_data);
        assert!(config.gate().is_open());
    }

    #[test]
    fn test_env_mode_from_lookup() {
        let config =
            GuardConfig::from_lookup(lookup(&[(VALIDATION_VAR, "env:APP_STRICT")])).unwrap();
        assert_eq!(config.gate, GateMode::Env("APP_STRICT".to_string()));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = GuardConfig::from_lookup(lookup(&[(VALIDATION_VAR, "sometimes")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { var: VALIDATION_VAR, .. }));

        let err = GuardConfig::from_lookup(lookup(&[(VALIDATION_VAR, "env:")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { .. }));

        let err = GuardConfig::from_lookup(lookup(&[(COERCE_VAR, "perhaps")])).unwrap_err();
        assert!(err.to_string().contains(COERCE_VAR));
    }

    #[test]
    fn test_from_yaml() {
        let config = GuardConfig::from_yaml_str("gate: never\ncoerce_data: false\n").unwrap();
        assert_eq!(config.gate, GateMode::Never);
        assert!(!config.coerce_data);
        assert!(!config.gate().is_open());
    }

    #[test]
    fn test_from_yaml_partial_uses_defaults() {
        let config = GuardConfig::from_yaml_str("gate: always\n").unwrap();
        assert_eq!(config.gate, GateMode::Always);
        assert!(config.coerce_data);
    }

    #[test]
    fn test_from_yaml_rejects_unknown_gate() {
        assert!(matches!(
            GuardConfig::from_yaml_str("gate: sometimes\n"),
            Err(ConfigError::Yaml(_))
        ));
    }
}
