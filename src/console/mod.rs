//! Console session
//!
//! Prompts once, reads one line, and prints a single verdict.

pub mod input;
pub mod session;

pub use input::read_username;
pub use session::{PROMPT, run, run_stdio};
