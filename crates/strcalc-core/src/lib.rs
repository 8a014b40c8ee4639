//! # strcalc-core: Pure Summation Parser
//!
//! This crate is the **heart** of strcalc. It turns a delimited string of
//! numbers into their sum, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        strcalc Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation Shell                           │   │
//! │  │    input text ──► calculate_sum ──► result / error banner       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ add(&str)                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ strcalc-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌────────────┐  ┌────────────┐  ┌─────────┐  │   │
//! │  │   │ delimiter  │  │ calculator │  │   types    │  │  error  │  │   │
//! │  │   │ header     │  │ add        │  │ SumReport  │  │ negative│  │   │
//! │  │   │ set        │  │ evaluate   │  │            │  │ numbers │  │   │
//! │  │   └────────────┘  └────────────┘  └────────────┘  └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - The `add` routine and the `StringCalculator` service
//! - [`delimiter`] - Delimiter sets and the `//<char>\n` header
//! - [`types`] - The `SumReport` returned by [`evaluate`]
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use strcalc_core::{add, CalculatorError};
//!
//! assert_eq!(add("").unwrap(), 0);
//! assert_eq!(add("1\n2,3").unwrap(), 6);
//! assert_eq!(add("//;\n1;2").unwrap(), 3);
//!
//! let err = add("1,-2,3,-4").unwrap_err();
//! assert_eq!(err.to_string(), "Negative numbers not allowed: -2, -4");
//! assert!(matches!(err, CalculatorError::NegativeNumbersNotAllowed { .. }));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod delimiter;
pub mod error;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{add, evaluate, StringCalculator};
pub use delimiter::{CustomDelimiterHeader, DelimiterSet};
pub use error::{CalculatorError, CoreResult};
pub use types::SumReport;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Delimiters that are always active, in the order they are reported.
pub const DEFAULT_DELIMITERS: [char; 2] = [',', '\n'];

/// Marker that opens a custom delimiter header (`//<char>\n`).
pub const HEADER_MARKER: &str = "//";
