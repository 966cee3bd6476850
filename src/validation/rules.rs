//! Validation rules
//!
//! Bounds and forbidden characters a username is checked against.

/// Shortest accepted username, in characters
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Longest accepted username, in characters
pub const DEFAULT_MAX_LENGTH: usize = 12;

/// Characters that may not appear anywhere in a username
pub const DEFAULT_FORBIDDEN_CHARS: &[char] = &[' ', '_'];

/// Rules applied by [`validate_username`](super::validate_username)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsernameRules {
    pub min_length: usize,
    pub max_length: usize,
    pub forbidden_chars: Vec<char>,
}

impl Default for UsernameRules {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            forbidden_chars: DEFAULT_FORBIDDEN_CHARS.to_vec(),
        }
    }
}

impl UsernameRules {
    /// Closed interval check on the character count
    pub fn length_in_bounds(&self, length: usize) -> bool {
        (self.min_length..=self.max_length).contains(&length)
    }

    pub fn contains_forbidden(&self, username: &str) -> bool {
        username.contains(self.forbidden_chars.as_slice())
    }
}
