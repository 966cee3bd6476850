//! Username validation
//!
//! Applies the length rule and then the character rule to a candidate username.

pub mod results;
pub mod rules;
pub mod validator;

pub use results::Verdict;
pub use rules::UsernameRules;
pub use validator::validate_username;
