//! Error types
//!
//! Rejected usernames are not errors; only failures to get an answer at all end up here.

use std::fmt;
use std::io;

/// Failures that stop the checker before a verdict is printed
#[derive(Debug)]
pub enum CheckError {
    /// Standard input ended before a line could be read
    InputExhausted,
    IoError(io::Error),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::InputExhausted => write!(f, "No input available: end of stream"),
            CheckError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::InputExhausted => None,
            CheckError::IoError(e) => Some(e),
        }
    }
}

impl From<io::Error> for CheckError {
    fn from(error: io::Error) -> Self {
        CheckError::IoError(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CheckError::InputExhausted.to_string(),
            "No input available: end of stream"
        );

        let io_err: CheckError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert_eq!(io_err.to_string(), "I/O error: pipe closed");
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error;

        let err = CheckError::from(io::Error::other("boom"));
        assert!(err.source().is_some());
        assert!(CheckError::InputExhausted.source().is_none());
    }
}
