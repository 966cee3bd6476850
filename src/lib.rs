pub mod console;
pub mod error;
pub mod utils;
pub mod validation;

pub use console::{run, run_stdio};
pub use validation::{UsernameRules, Verdict, validate_username};
