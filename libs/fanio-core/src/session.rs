//! In-memory quiz session.
//!
//! A session fixes the question order once at start, then judges guesses
//! round by round and keeps the running score. Restarting reshuffles.

use crate::error::Result;
use crate::matching::compare_answers;
use crate::scoring::{calculate_points, rate_score, PostGameRating};
use crate::shuffle::{random_start_offset, shuffle_with};
use crate::types::{GameScore, GameSettings, Guess, Question, Quiz};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// What happened to a submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum GuessOutcome {
    /// The guess matched; the session moved on to the next round.
    Correct { similarity: f64, points: f64 },
    /// The guess did not match; the round stays open.
    Incorrect { similarity: f64 },
    /// Every round has already been played.
    Finished,
}

impl GuessOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }
}

/// One play-through of a quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Quiz,
    settings: GameSettings,
    round: usize,
    score: GameScore,
}

impl QuizSession {
    /// Start a session with questions shuffled by the thread generator.
    pub fn new(quiz: Quiz, settings: GameSettings) -> Result<Self> {
        Self::with_rng(quiz, settings, &mut rand::thread_rng())
    }

    /// Start a session with questions shuffled by `rng`.
    pub fn with_rng<R: Rng>(mut quiz: Quiz, settings: GameSettings, rng: &mut R) -> Result<Self> {
        quiz.validate()?;
        quiz.questions = shuffle_with(quiz.questions, rng);

        info!(
            quiz = %quiz.id,
            questions = quiz.questions.len(),
            threshold = settings.answer_threshold.value(),
            "Starting quiz session"
        );

        Ok(Self {
            quiz,
            settings,
            round: 0,
            score: GameScore::default(),
        })
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Questions in play order.
    pub fn questions(&self) -> &[Question] {
        &self.quiz.questions
    }

    /// Zero-based index of the current round.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn total_rounds(&self) -> usize {
        self.quiz.questions.len()
    }

    pub fn is_finished(&self) -> bool {
        self.round >= self.total_rounds()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.questions.get(self.round)
    }

    pub fn score(&self) -> &GameScore {
        &self.score
    }

    /// Judge a guess for the current round.
    ///
    /// `elapsed` is the time since the clip started and `song_length` the
    /// full length of the song; together they decide the points for a
    /// correct guess.
    pub fn submit_guess(
        &mut self,
        input: &str,
        elapsed: Duration,
        song_length: Duration,
    ) -> GuessOutcome {
        let Some(question) = self.current_question() else {
            return GuessOutcome::Finished;
        };

        let result = compare_answers(input, &question.answer, &self.settings);
        debug!(
            round = self.round,
            similarity = result.similarity,
            length_rejected = result.length_rejected,
            correct = result.is_correct,
            "Guess submitted"
        );

        if !result.is_correct {
            return GuessOutcome::Incorrect {
                similarity: result.similarity,
            };
        }

        let delta = elapsed.as_secs_f64();
        let points = calculate_points(
            song_length.as_secs_f64(),
            delta,
            self.settings.max_points_per_round.value(),
        );
        self.finish_round(Guess {
            elapsed_time: delta,
            score: points,
        });

        GuessOutcome::Correct {
            similarity: result.similarity,
            points,
        }
    }

    /// Give up on the current round without points.
    ///
    /// Returns `false` when there is no round left to skip.
    pub fn skip_round(&mut self, elapsed: Duration) -> bool {
        if self.is_finished() {
            return false;
        }

        debug!(round = self.round, "Round skipped");
        self.finish_round(Guess {
            elapsed_time: elapsed.as_secs_f64(),
            score: 0.0,
        });
        true
    }

    /// Clip start for the current question, in seconds.
    ///
    /// Quizzes with random offsets pick a fresh position inside the song;
    /// otherwise the question's own offset is used, if it has one.
    pub fn start_offset<R: Rng>(&self, duration_secs: f64, rng: &mut R) -> Option<f64> {
        let question = self.current_question()?;
        if self.quiz.random_offsets {
            Some(random_start_offset(duration_secs, rng))
        } else {
            question.start_offset
        }
    }

    /// Start over with a new question order and an empty score.
    pub fn restart(&mut self) {
        self.restart_with(&mut rand::thread_rng());
    }

    pub fn restart_with<R: Rng>(&mut self, rng: &mut R) {
        let questions = std::mem::take(&mut self.quiz.questions);
        self.quiz.questions = shuffle_with(questions, rng);
        self.round = 0;
        self.score = GameScore::default();
        info!(quiz = %self.quiz.id, "Restarting quiz session");
    }

    /// Rate the current total against the quiz's best score.
    pub fn rating(&self, top_score: Option<f64>) -> PostGameRating {
        rate_score(self.score.total_score, top_score)
    }

    fn finish_round(&mut self, guess: Guess) {
        self.score.record(guess);
        self.round += 1;

        if self.is_finished() {
            info!(
                quiz = %self.quiz.id,
                total_score = self.score.total_score,
                total_time = self.score.total_time,
                "Quiz finished"
            );
        }
    }
}
