//! # Commands
//!
//! Actions the presentation layer can trigger. Each command updates the
//! display state and returns a serializable response or an [`ApiError`].
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  "Calculate Sum" pressed with the current input text                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  calculate_sum(&mut state, &config, input)                              │
//! │         │  1. clear previous banner                                     │
//! │         │  2. strcalc_core::evaluate(input)                             │
//! │         │  3. update result / banner                                    │
//! │         ▼                                                               │
//! │  Result<CalculationResponse, ApiError>                                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use strcalc_core::SumReport;
use tracing::{debug, info};

use crate::config::ShellConfig;
use crate::error::ApiError;
use crate::state::ShellState;

/// Successful calculation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    pub sum: i64,
    pub custom_delimiter: Option<char>,
    pub ignored: Vec<String>,
}

impl From<SumReport> for CalculationResponse {
    fn from(report: SumReport) -> Self {
        CalculationResponse {
            sum: report.sum,
            custom_delimiter: report.custom_delimiter,
            ignored: report.ignored,
        }
    }
}

/// Runs the summation parser on `input` and updates the display state.
///
/// ## Example
/// ```rust
/// use strcalc_shell::commands::calculate_sum;
/// use strcalc_shell::config::ShellConfig;
/// use strcalc_shell::state::ShellState;
///
/// let config = ShellConfig::default();
/// let mut state = ShellState::new();
///
/// let response = calculate_sum(&mut state, &config, "1\n2,3").unwrap();
/// assert_eq!(response.sum, 6);
/// assert_eq!(state.result, "6");
///
/// assert!(calculate_sum(&mut state, &config, "-1").is_err());
/// assert_eq!(state.result, "Error!");
/// ```
pub fn calculate_sum(
    state: &mut ShellState,
    config: &ShellConfig,
    input: &str,
) -> Result<CalculationResponse, ApiError> {
    state.clear_error();
    debug!(len = input.len(), "Calculating sum");

    match state.calculator().evaluate(input) {
        Ok(report) => {
            info!(sum = report.sum, ignored = report.ignored.len(), "Calculation succeeded");
            state.show_sum(report.sum);
            Ok(CalculationResponse::from(report))
        }
        Err(err) => {
            let api_err = ApiError::from(err);
            info!(negatives = ?api_err.negatives, "Calculation rejected");
            state.show_error(&config.error_result, api_err.message.clone());
            Err(api_err)
        }
    }
}
