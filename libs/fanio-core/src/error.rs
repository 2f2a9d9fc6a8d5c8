//! Error types for fanio-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors raised when building settings or starting a quiz session.
///
/// Matching, shuffling and scoring never fail; only the inputs that
/// configure a game are validated.
#[derive(Debug, Error, PartialEq)]
pub enum QuizError {
    #[error("quiz has no questions")]
    EmptyQuiz,

    #[error("invalid question at index {index}: {reason}")]
    InvalidQuestion { index: usize, reason: String },

    #[error("answer threshold must be between 0 and 100, got {0}")]
    InvalidThreshold(f64),

    #[error("max points per round must be a non-negative number, got {0}")]
    InvalidMaxPoints(f64),
}
