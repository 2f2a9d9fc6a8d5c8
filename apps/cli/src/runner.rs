//! Interactive game loop.
//!
//! Reads one guess per line from any reader and writes the game to any
//! writer, so the same loop drives a terminal and the integration tests.

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use fanio_core::{GameScore, GuessOutcome, PostGameRating, QuizSession};
use rand::Rng;
use tracing::{debug, info};

use crate::error::Result;

/// Outcome of a played game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub score: GameScore,
    pub rating: PostGameRating,
    /// False when the input ended before every round was played.
    pub completed: bool,
}

/// Plays a session round by round.
pub struct Runner<R, W> {
    input: R,
    output: W,
    round_length: Duration,
}

impl<R: BufRead, W: Write> Runner<R, W> {
    pub fn new(input: R, output: W, round_length: Duration) -> Self {
        Self {
            input,
            output,
            round_length,
        }
    }

    /// Play every remaining round of `session`.
    ///
    /// An empty line skips the round. A round also ends once the round
    /// length has passed. End of input aborts the game.
    pub fn play<G: Rng>(
        &mut self,
        session: &mut QuizSession,
        top_score: Option<f64>,
        rng: &mut G,
    ) -> Result<GameSummary> {
        writeln!(
            self.output,
            "{} ({} songs)",
            session.quiz().title,
            session.total_rounds()
        )?;

        let mut completed = true;
        while let Some(question) = session.current_question().cloned() {
            writeln!(
                self.output,
                "\nRound {}/{}: {}",
                session.round() + 1,
                session.total_rounds(),
                question.url
            )?;
            if let Some(offset) = session.start_offset(self.round_length.as_secs_f64(), rng) {
                writeln!(self.output, "Starts at {offset:.1}s")?;
            }

            if !self.play_round(session, &question.answer)? {
                completed = false;
                info!(round = session.round(), "Input closed, ending game");
                break;
            }
        }

        let summary = GameSummary {
            score: session.score().clone(),
            rating: session.rating(top_score),
            completed,
        };

        writeln!(
            self.output,
            "\n{} {}\nTotal: {:.0} points in {:.1}s",
            summary.rating.title(),
            summary.rating.subtitle(),
            summary.score.total_score,
            summary.score.total_time
        )?;
        self.output.flush()?;

        Ok(summary)
    }

    /// Returns `false` if input ended mid-round.
    fn play_round(&mut self, session: &mut QuizSession, answer: &str) -> Result<bool> {
        let started = Instant::now();

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            let guess = line.trim_end_matches(['\r', '\n']);

            let elapsed = started.elapsed();
            if elapsed >= self.round_length {
                session.skip_round(self.round_length);
                writeln!(self.output, "Time's up! The answer was: {answer}")?;
                return Ok(true);
            }

            if guess.trim().is_empty() {
                session.skip_round(elapsed);
                writeln!(self.output, "Skipped. The answer was: {answer}")?;
                return Ok(true);
            }

            match session.submit_guess(guess, elapsed, self.round_length) {
                GuessOutcome::Correct { similarity, points } => {
                    writeln!(
                        self.output,
                        "Correct! {answer} (+{points:.0} points, {similarity:.0}% match)"
                    )?;
                    return Ok(true);
                }
                GuessOutcome::Incorrect { similarity } => {
                    debug!(similarity, "Incorrect guess");
                    writeln!(self.output, "Not quite ({similarity:.0}% match), try again")?;
                }
                GuessOutcome::Finished => return Ok(true),
            }
        }
    }
}
