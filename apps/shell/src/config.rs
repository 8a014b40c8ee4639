//! Shell configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable               | Default  | Meaning                              |
//! |------------------------|----------|--------------------------------------|
//! | `STRCALC_OUTPUT`       | `text`   | `text` or `json`                     |
//! | `STRCALC_ERROR_RESULT` | `Error!` | Result text shown when a sum fails   |

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

pub const OUTPUT_VAR: &str = "STRCALC_OUTPUT";
pub const ERROR_RESULT_VAR: &str = "STRCALC_ERROR_RESULT";

/// How the shell renders the outcome on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// "Result: 6" plus an error line when the calculation fails.
    #[default]
    Text,

    /// One JSON document per run.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: OUTPUT_VAR.to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Output rendering
    pub output: OutputFormat,

    /// Result text displayed in place of a sum when the calculation fails
    pub error_result: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            output: OutputFormat::default(),
            error_result: "Error!".to_string(),
        }
    }
}

impl ShellConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ShellConfig::default();

        let output = match lookup(OUTPUT_VAR) {
            Some(value) => value.parse()?,
            None => defaults.output,
        };

        let error_result = lookup(ERROR_RESULT_VAR).unwrap_or(defaults.error_result);

        Ok(ShellConfig {
            output,
            error_result,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}
