//! Error handling
//!
//! Defines error types and handling for the username checker.

pub mod handlers;
pub mod types;

pub use handlers::{exit_code, handle_error};
pub use types::*;
