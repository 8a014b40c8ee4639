//! # strcalc Shell Library
//!
//! Headless presentation shell over the summation parser. It plays the part
//! of the input form: take text, run `calculate_sum`, render the result line
//! and the error banner.
//!
//! ## Module Organization
//! ```text
//! strcalc_shell/
//! ├── lib.rs          ◄─── You are here (startup, input, rendering)
//! ├── commands.rs     ◄─── calculate_sum
//! ├── state.rs        ◄─── Display state (result, banner)
//! ├── config.rs       ◄─── Environment configuration
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use anyhow::Context;
use serde::Serialize;
use std::io::Read;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::CalculationResponse;
use config::{OutputFormat, ShellConfig};
use error::ApiError;
use state::ShellState;

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn,strcalc_shell=info";

/// Runs the shell once.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging (stderr, RUST_LOG or DEFAULT_LOG_FILTER)         │
/// │  2. Load ShellConfig from the environment                               │
/// │  3. Read input: arguments joined by '\n', else all of stdin             │
/// │  4. calculate_sum                                                       │
/// │  5. Render to stdout; exit status reflects success                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> anyhow::Result<ExitCode> {
    init_tracing();

    let config = ShellConfig::load().context("failed to load shell configuration")?;
    info!(output = ?config.output, "Configuration loaded");

    let input = match input_from_args(std::env::args().skip(1)) {
        Some(input) => input,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read input from stdin")?;
            buf
        }
    };

    let mut state = ShellState::new();
    let outcome = commands::calculate_sum(&mut state, &config, &input);

    println!("{}", render(&config, &state, &outcome)?);

    Ok(if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Joins command-line arguments into one input string.
///
/// Arguments are joined with a newline so `strcalc-shell 1 2 3` and
/// `strcalc-shell '//;' '1;2'` both read naturally. Returns `None` when there
/// are no arguments.
pub fn input_from_args<I>(args: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    if args.is_empty() {
        None
    } else {
        Some(args.join("\n"))
    }
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Rendered<'a> {
    Ok(&'a CalculationResponse),
    Error(&'a ApiError),
}

/// Renders the display state (text) or the command outcome (JSON).
pub fn render(
    config: &ShellConfig,
    state: &ShellState,
    outcome: &Result<CalculationResponse, ApiError>,
) -> anyhow::Result<String> {
    match config.output {
        OutputFormat::Text => {
            let mut out = format!("Result: {}", state.result);
            if let Some(message) = &state.error_message {
                out.push('\n');
                out.push_str(message);
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let rendered = match outcome {
                Ok(response) => Rendered::Ok(response),
                Err(err) => Rendered::Error(err),
            };
            serde_json::to_string_pretty(&rendered).context("failed to serialize output")
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (custom delimiter detection)
/// - `RUST_LOG=strcalc_core=warn` - Only ignored-token warnings from the core
/// - Default: [`DEFAULT_LOG_FILTER`]
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(config: &ShellConfig, input: &str) -> (ShellState, String) {
        let mut state = ShellState::new();
        let outcome = commands::calculate_sum(&mut state, config, input);
        let rendered = render(config, &state, &outcome).unwrap();
        (state, rendered)
    }

    #[test]
    fn test_input_from_args() {
        assert_eq!(input_from_args(Vec::<String>::new()), None);
        assert_eq!(input_from_args(vec!["1,2".to_string()]), Some("1,2".to_string()));
        assert_eq!(
            input_from_args(vec!["//;".to_string(), "1;2".to_string()]),
            Some("//;\n1;2".to_string())
        );
    }

    #[test]
    fn test_args_sum_through_header() {
        let input = input_from_args(vec!["//;".to_string(), "1;2".to_string()]).unwrap();
        assert_eq!(strcalc_core::add(&input).unwrap(), 3);
    }

    #[test]
    fn test_render_text_success() {
        let (_, rendered) = run_with(&ShellConfig::default(), "1,2,3");
        assert_eq!(rendered, "Result: 6");
    }

    #[test]
    fn test_render_text_error() {
        let (_, rendered) = run_with(&ShellConfig::default(), "1,-2");
        assert_eq!(rendered, "Result: Error!\nNegative numbers not allowed: -2");
    }

    #[test]
    fn test_render_json_success() {
        let config = ShellConfig {
            output: OutputFormat::Json,
            ..ShellConfig::default()
        };
        let (_, rendered) = run_with(&config, "1\n2");
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["status"], "ok");
        assert_eq!(value["sum"], 3);
        assert!(value["customDelimiter"].is_null());
    }

    #[test]
    fn test_render_json_error() {
        let config = ShellConfig {
            output: OutputFormat::Json,
            ..ShellConfig::default()
        };
        let (state, rendered) = run_with(&config, "-1,-2");
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["status"], "error");
        assert_eq!(value["code"], "NEGATIVE_NUMBERS");
        assert_eq!(value["message"], "Negative numbers not allowed: -1, -2");
        assert_eq!(value["negatives"], serde_json::json!([-1, -2]));
        assert_eq!(state.result, "Error!");
    }
}
