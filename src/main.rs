//! Username Check - Entry Point
//!
//! Prompts for a username on stdin and reports whether it is acceptable.

use std::process::ExitCode;

use username_check::console::run_stdio;
use username_check::error::{exit_code, handle_error};
use username_check::utils::logging::setup_logging;
use username_check::validation::UsernameRules;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the prompt and the verdict
    setup_logging();

    match run_stdio(&UsernameRules::default()).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            handle_error(&err);
            ExitCode::from(exit_code(&err))
        }
    }
}
