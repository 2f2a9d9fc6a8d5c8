//! Error handling for the terminal runner

use std::path::PathBuf;

use fanio_core::QuizError;
use thiserror::Error;

/// Runner error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Invalid quiz file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid quiz: {0}")]
    Quiz(#[from] QuizError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for runner operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let error = CliError::Config("round length must be positive".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: round length must be positive"
        );
    }

    #[test]
    fn test_error_display_quiz() {
        let error = CliError::from(QuizError::EmptyQuiz);
        assert_eq!(error.to_string(), "Invalid quiz: quiz has no questions");
    }

    #[test]
    fn test_error_display_io() {
        let error = CliError::Io {
            path: PathBuf::from("quiz.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(error.to_string(), "Failed to read quiz.json: missing");
    }
}
