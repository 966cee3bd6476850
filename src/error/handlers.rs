//! Error handlers
//!
//! Provides error reporting and exit code mapping.

use crate::error::types::CheckError;
use log::error;

/// Report an error on stderr through the logger
pub fn handle_error(err: &CheckError) {
    error!("Username check failed: {}", err);
}

/// Convert error to process exit code
pub fn exit_code(err: &CheckError) -> u8 {
    match err {
        CheckError::InputExhausted => 1,
        CheckError::IoError(_) => 1,
    }
}
