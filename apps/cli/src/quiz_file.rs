//! Quiz loading from JSON files.
//!
//! The file holds a single quiz in the same camelCase shape the web client
//! receives from the API.

use std::fs;
use std::path::Path;

use fanio_core::Quiz;

use crate::error::{CliError, Result};

/// Read, parse and validate a quiz file.
pub fn load_quiz(path: &Path) -> Result<Quiz> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let quiz = parse_quiz(&content)?;
    tracing::debug!(path = %path.display(), questions = quiz.questions.len(), "Loaded quiz");
    Ok(quiz)
}

/// Parse and validate quiz JSON.
pub fn parse_quiz(content: &str) -> Result<Quiz> {
    let quiz: Quiz = serde_json::from_str(content)?;
    quiz.validate()?;
    Ok(quiz)
}
