//! # API Error Type
//!
//! Unified error type returned by shell commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  calculate_sum("1,-2")                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  strcalc_core::evaluate ── CalculatorError::NegativeNumbersNotAllowed   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ApiError { code: NEGATIVE_NUMBERS, message, negatives: [-2] }          │
//! │         │                                                               │
//! │         ├──► ShellState.error_message  (banner text)                    │
//! │         └──► JSON output                                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use strcalc_core::CalculatorError;

/// API error returned from shell commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NEGATIVE_NUMBERS",
///   "message": "Negative numbers not allowed: -2, -4",
///   "negatives": [-2, -4]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Offending values, when the error is about specific numbers
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub negatives: Vec<i64>,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input contained negative numbers
    NegativeNumbers,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            negatives: Vec::new(),
        }
    }
}

/// Converts core errors to API errors.
impl From<CalculatorError> for ApiError {
    fn from(err: CalculatorError) -> Self {
        let message = err.to_string();
        match err {
            CalculatorError::NegativeNumbersNotAllowed { values } => ApiError {
                negatives: values,
                ..ApiError::new(ErrorCode::NegativeNumbers, message)
            },
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
