//! Core types for the quiz game.

use crate::error::{QuizError, Result};
use crate::matching::ALTERNATIVE_SEPARATOR;
use crate::normalize::normalize;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default points awarded for an instant correct guess.
pub const MAX_POINTS_PER_ROUND: f64 = 10_000.0;

/// Minimum similarity (0-100) at which a guess counts as correct.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AnswerThreshold(f64);

impl AnswerThreshold {
    /// Create a threshold, rejecting values outside `[0, 100]`.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && (0.0..=100.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(QuizError::InvalidThreshold(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether a similarity score reaches this threshold.
    pub fn accepts(self, score: f64) -> bool {
        score >= self.0
    }
}

impl Default for AnswerThreshold {
    fn default() -> Self {
        Self(70.0)
    }
}

impl TryFrom<f64> for AnswerThreshold {
    type Error = QuizError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<AnswerThreshold> for f64 {
    fn from(threshold: AnswerThreshold) -> Self {
        threshold.0
    }
}

/// Points awarded for an instant correct guess; finite and not negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct MaxPoints(f64);

impl MaxPoints {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(QuizError::InvalidMaxPoints(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for MaxPoints {
    fn default() -> Self {
        Self(MAX_POINTS_PER_ROUND)
    }
}

impl TryFrom<f64> for MaxPoints {
    type Error = QuizError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MaxPoints> for f64 {
    fn from(points: MaxPoints) -> Self {
        points.0
    }
}

/// Settings that shape how guesses are judged and scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameSettings {
    pub answer_threshold: AnswerThreshold,
    /// Largest allowed difference in normalized length between guess and
    /// answer. `None` disables the check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length_gap: Option<usize>,
    pub max_points_per_round: MaxPoints,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            answer_threshold: AnswerThreshold::default(),
            max_length_gap: None,
            max_points_per_round: MaxPoints::default(),
        }
    }
}

/// A single song in a quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: Uuid,
    pub url: String,
    /// Correct title. Alternatives are separated by `/`.
    pub answer: String,
    /// Fixed clip start in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Question {
    /// Create a question with a fresh ID.
    pub fn new(url: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            url: url.into(),
            answer: answer.into(),
            start_offset: None,
            added_at: None,
            updated_at: None,
        }
    }
}

/// A playable quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Start every clip at a random position instead of the question offset.
    #[serde(default)]
    pub random_offsets: bool,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            random_offsets: false,
            questions,
        }
    }

    /// Check that the quiz can be played.
    pub fn validate(&self) -> Result<()> {
        if self.questions.is_empty() {
            return Err(QuizError::EmptyQuiz);
        }

        for (index, question) in self.questions.iter().enumerate() {
            if question.answer.trim().is_empty() {
                return Err(QuizError::InvalidQuestion {
                    index,
                    reason: "empty answer".to_string(),
                });
            }

            // An alternative with nothing left to compare would accept any
            // punctuation-only guess.
            let has_blank_alternative = question
                .answer
                .split(ALTERNATIVE_SEPARATOR)
                .any(|alternative| normalize(alternative).is_empty());
            if has_blank_alternative {
                return Err(QuizError::InvalidQuestion {
                    index,
                    reason: "empty answer alternative".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// One finished round: time to answer and points earned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guess {
    /// Seconds from clip start to the guess.
    pub elapsed_time: f64,
    pub score: f64,
}

/// Running score of a game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScore {
    pub total_score: f64,
    pub total_time: f64,
    pub guesses: Vec<Guess>,
}

impl GameScore {
    pub fn record(&mut self, guess: Guess) {
        self.total_score += guess.score;
        self.total_time += guess.elapsed_time;
        self.guesses.push(guess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_threshold_bounds() {
        assert!(AnswerThreshold::new(0.0).is_ok());
        assert!(AnswerThreshold::new(100.0).is_ok());
        assert_eq!(
            AnswerThreshold::new(100.5),
            Err(QuizError::InvalidThreshold(100.5))
        );
        assert!(AnswerThreshold::new(-1.0).is_err());
        assert!(AnswerThreshold::new(f64::NAN).is_err());
    }

    #[test]
    fn test_threshold_accepts_inclusive() {
        let threshold = AnswerThreshold::new(70.0).unwrap();
        assert!(threshold.accepts(70.0));
        assert!(threshold.accepts(100.0));
        assert!(!threshold.accepts(69.99));
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let settings: GameSettings = serde_json::from_str(r#"{"answerThreshold": 80}"#).unwrap();
        assert_eq!(settings.answer_threshold.value(), 80.0);
        assert_eq!(settings.max_length_gap, None);
        assert_eq!(settings.max_points_per_round.value(), MAX_POINTS_PER_ROUND);
    }

    #[test]
    fn test_settings_reject_invalid_threshold() {
        let result: std::result::Result<GameSettings, _> =
            serde_json::from_str(r#"{"answerThreshold": 150}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_reject_invalid_max_points() {
        for json in [r#"{"maxPointsPerRound": -1}"#, r#"{"maxPointsPerRound": -0.5}"#] {
            let result: std::result::Result<GameSettings, _> = serde_json::from_str(json);
            assert!(result.is_err(), "{json} should be rejected");
        }

        let settings: GameSettings = serde_json::from_str(r#"{"maxPointsPerRound": 500}"#).unwrap();
        assert_eq!(settings.max_points_per_round.value(), 500.0);

        assert!(matches!(
            MaxPoints::new(f64::NAN),
            Err(QuizError::InvalidMaxPoints(_))
        ));
        assert!(MaxPoints::new(f64::INFINITY).is_err());
        assert!(MaxPoints::new(0.0).is_ok());
    }

    #[test]
    fn test_quiz_validate() {
        let quiz = Quiz::new("Empty", vec![]);
        assert_eq!(quiz.validate(), Err(QuizError::EmptyQuiz));

        let quiz = Quiz::new(
            "Blank answer",
            vec![Question::new("a", "Song"), Question::new("b", "   ")],
        );
        assert_eq!(
            quiz.validate(),
            Err(QuizError::InvalidQuestion {
                index: 1,
                reason: "empty answer".to_string()
            })
        );

        for answer in ["Wonderwall/", "/Wonderwall", "Wonderwall/ - ", "!!!"] {
            let quiz = Quiz::new("Blank alternative", vec![Question::new("a", answer)]);
            assert_eq!(
                quiz.validate(),
                Err(QuizError::InvalidQuestion {
                    index: 0,
                    reason: "empty answer alternative".to_string()
                }),
                "{answer} should be rejected"
            );
        }

        let quiz = Quiz::new("Ok", vec![Question::new("a", "Song")]);
        assert!(quiz.validate().is_ok());

        let quiz = Quiz::new("Ok", vec![Question::new("a", "AC/DC Thunderstruck/Thunderstruck")]);
        assert!(quiz.validate().is_ok());
    }

    #[test]
    fn test_question_deserialize_camel_case() {
        let json = r#"{
            "id": "6f1c9a8e-2b1d-4a43-9a57-5d4b3c2e1f00",
            "url": "https://youtu.be/abc",
            "answer": "Bohemian Rhapsody",
            "startOffset": 12.5,
            "addedAt": "2024-01-01T00:00:00Z"
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.answer, "Bohemian Rhapsody");
        assert_eq!(question.start_offset, Some(12.5));
        assert!(question.added_at.is_some());
        assert!(question.updated_at.is_none());
    }

    #[test]
    fn test_game_score_record() {
        let mut score = GameScore::default();
        score.record(Guess {
            elapsed_time: 2.0,
            score: 900.0,
        });
        score.record(Guess {
            elapsed_time: 3.5,
            score: 100.0,
        });
        assert_eq!(score.total_score, 1000.0);
        assert_eq!(score.total_time, 5.5);
        assert_eq!(score.guesses.len(), 2);
    }
}
