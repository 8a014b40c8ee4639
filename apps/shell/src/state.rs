//! # Display State
//!
//! What the presentation layer shows: the result line and an optional error
//! banner.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  new() ──► result "0", no banner                                        │
//! │               │                                                         │
//! │        calculate_sum                                                    │
//! │               │                                                         │
//! │      ┌────────┴─────────┐                                               │
//! │      ▼                  ▼                                               │
//! │  show_sum(6)        show_error("Error!", msg)                           │
//! │  result "6"         result "Error!"                                     │
//! │  no banner          banner = msg                                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use strcalc_core::StringCalculator;

/// Display state owned by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellState {
    /// Text shown in the result area
    pub result: String,

    /// Banner text, present only after a failed calculation
    pub error_message: Option<String>,

    #[serde(skip)]
    calculator: StringCalculator,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellState {
    pub fn new() -> Self {
        ShellState {
            result: "0".to_string(),
            error_message: None,
            calculator: StringCalculator::new(),
        }
    }

    pub fn calculator(&self) -> StringCalculator {
        self.calculator
    }

    /// Removes the banner left by a previous calculation.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn show_sum(&mut self, sum: i64) {
        self.result = sum.to_string();
        self.error_message = None;
    }

    pub fn show_error(&mut self, error_result: &str, message: impl Into<String>) {
        self.result = error_result.to_string();
        self.error_message = Some(message.into());
    }

    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }
}
