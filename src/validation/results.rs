//! Validation result types
//!
//! Defines the three outcomes of a username check and the text each one prints.

/// Printed when the length rule fails
pub const INVALID_LENGTH_MESSAGE: &str = "Your username must be between 4-12 characters";

/// Printed when the character rule fails
pub const FORBIDDEN_CHARACTER_MESSAGE: &str = "Username must not contain spaces or underscores";

/// Prefix of the greeting for an accepted username
pub const GREETING_PREFIX: &str = "Hello, ";

/// Outcome of checking one username
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    InvalidLength,
    ForbiddenCharacter,
    /// Holds the username exactly as it was read
    Accepted(String),
}

impl Verdict {
    /// Text written to stdout for this verdict.
    ///
    /// Rejections end with a newline, the greeting does not.
    pub fn render(&self) -> String {
        match self {
            Verdict::InvalidLength => format!("{}\n", INVALID_LENGTH_MESSAGE),
            Verdict::ForbiddenCharacter => format!("{}\n", FORBIDDEN_CHARACTER_MESSAGE),
            Verdict::Accepted(username) => format!("{}{}", GREETING_PREFIX, username),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_are_line_terminated() {
        assert_eq!(
            Verdict::InvalidLength.render(),
            "Your username must be between 4-12 characters\n"
        );
        assert_eq!(
            Verdict::ForbiddenCharacter.render(),
            "Username must not contain spaces or underscores\n"
        );
    }

    #[test]
    fn test_greeting_has_no_line_terminator() {
        let verdict = Verdict::Accepted("abcd".to_string());
        assert_eq!(verdict.render(), "Hello, abcd");
    }
}
