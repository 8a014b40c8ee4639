//! # strcalc Shell Entry Point
//!
//! ```text
//! $ strcalc-shell 1 2 3
//! Result: 6
//!
//! $ printf '//;\n1;-2' | STRCALC_OUTPUT=json strcalc-shell
//! { "status": "error", "code": "NEGATIVE_NUMBERS", ... }
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match strcalc_shell::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
