//! Error types for rust-games.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The action is not legal in the current state.
    #[error("invalid action {action}: {reason}")]
    InvalidAction { action: String, reason: String },

    /// Utility was requested before the game ended.
    #[error("game is not over yet")]
    NotTerminal,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Interactive input could not be read.
    #[error("prompt failed: {message}")]
    Prompt { message: String },
}

impl Error {
    /// Build an `InvalidAction` from anything printable.
    pub fn invalid_action(action: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        Error::InvalidAction {
            action: action.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "perform I/O".to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_action_message() {
        let err = Error::invalid_action("(1, 1)", "cell is already occupied");
        assert_eq!(err.to_string(), "invalid action (1, 1): cell is already occupied");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().starts_with("failed to perform I/O"));
    }
}
