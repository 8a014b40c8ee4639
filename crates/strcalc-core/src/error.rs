//! # Error Types
//!
//! Domain-specific error types for strcalc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  strcalc-core errors (this file)                                       │
//! │  └── CalculatorError  - Negative numbers found in the input            │
//! │                                                                         │
//! │  shell errors (apps/shell)                                             │
//! │  ├── ApiError         - What the presentation layer renders            │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  Flow: CalculatorError → ApiError → error banner / JSON                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Malformed headers and non-numeric tokens are tolerated by the parser, so
//! there is exactly one failure mode. Its message text is part of the public
//! contract.

use thiserror::Error;

// =============================================================================
// Calculator Error
// =============================================================================

/// Errors raised by [`crate::add`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// One or more negative numbers appeared in the input.
    ///
    /// Raised once, after the whole input has been scanned, so `values`
    /// holds every negative in the order it was encountered.
    ///
    /// ## Example
    /// ```rust
    /// use strcalc_core::CalculatorError;
    ///
    /// let err = CalculatorError::NegativeNumbersNotAllowed { values: vec![-2, -4] };
    /// assert_eq!(err.to_string(), "Negative numbers not allowed: -2, -4");
    /// ```
    #[error("Negative numbers not allowed: {}", join_values(.values))]
    NegativeNumbersNotAllowed { values: Vec<i64> },
}

impl CalculatorError {
    /// Returns the offending negative values in encounter order.
    pub fn negatives(&self) -> &[i64] {
        match self {
            CalculatorError::NegativeNumbersNotAllowed { values } => values,
        }
    }
}

fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CalculatorError.
pub type CoreResult<T> = Result<T, CalculatorError>;

// =============================================================================
// Unit Tests
// =============================================================================
