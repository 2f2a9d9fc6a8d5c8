//! Core quiz library shared by the fanio applications.
//!
//! Provides:
//! - Text normalization for song-title comparison
//! - Answer matching (Levenshtein similarity against a threshold)
//! - Fisher-Yates question shuffling and uniform random helpers
//! - Round points and post-game rating
//! - An in-memory quiz session driving one game
//! - Shared types (Question, Quiz, GameScore, GameSettings, etc.)

pub mod error;
pub mod matching;
pub mod normalize;
pub mod scoring;
pub mod session;
pub mod shuffle;
pub mod types;

pub use error::{QuizError, Result};
pub use matching::{
    best_similarity, compare_answers, levenshtein_distance, similarity, within_length_gap,
    MatchResult,
};
pub use normalize::normalize;
pub use scoring::{calculate_points, rate_score, PostGameRating};
pub use session::{GuessOutcome, QuizSession};
pub use shuffle::{random_number, random_start_offset, shuffle, shuffle_with};
pub use types::{AnswerThreshold, GameScore, GameSettings, Guess, MaxPoints, Question, Quiz};
