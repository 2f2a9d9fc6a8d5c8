//! Runner configuration.
//!
//! Values come from command-line flags, falling back to `FANIO_*`
//! environment variables (a `.env` file is loaded first) and then to the
//! core defaults.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use fanio_core::{AnswerThreshold, GameSettings};

use crate::error::{CliError, Result};

/// Default song length assumed for scoring when the quiz has no player.
pub const DEFAULT_ROUND_LENGTH_SECS: f64 = 30.0;

#[derive(Parser, Debug)]
#[command(
    name = "fanio",
    author,
    version,
    about = "Play a music quiz in the terminal",
    long_about = None
)]
pub struct Args {
    /// Path to the quiz JSON file
    pub quiz: PathBuf,

    /// Minimum similarity (0-100) for a guess to count as correct
    #[arg(long, env = "FANIO_ANSWER_THRESHOLD")]
    pub threshold: Option<f64>,

    /// Largest allowed length difference between guess and answer
    #[arg(long, env = "FANIO_MAX_LENGTH_GAP")]
    pub max_length_gap: Option<usize>,

    /// Seconds per round; also the song length used for points
    #[arg(long, env = "FANIO_ROUND_LENGTH", default_value_t = DEFAULT_ROUND_LENGTH_SECS)]
    pub round_length: f64,

    /// Seed for the question order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Best score on record, used for the final rating
    #[arg(long)]
    pub top_score: Option<f64>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated runner configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub quiz_path: PathBuf,
    pub settings: GameSettings,
    pub round_length: Duration,
    pub seed: Option<u64>,
    pub top_score: Option<f64>,
    pub verbose: bool,
}

impl Config {
    /// Load `.env`, parse the process arguments and validate them.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let answer_threshold = match args.threshold {
            Some(value) => AnswerThreshold::new(value)?,
            None => AnswerThreshold::default(),
        };

        if !args.round_length.is_finite() || args.round_length <= 0.0 {
            return Err(CliError::Config(format!(
                "round length must be a positive number of seconds, got {}",
                args.round_length
            )));
        }

        let round_length = Duration::try_from_secs_f64(args.round_length).map_err(|e| {
            CliError::Config(format!(
                "round length of {} seconds is out of range: {e}",
                args.round_length
            ))
        })?;

        Ok(Self {
            quiz_path: args.quiz,
            settings: GameSettings {
                answer_threshold,
                max_length_gap: args.max_length_gap,
                ..GameSettings::default()
            },
            round_length,
            seed: args.seed,
            top_score: args.top_score,
            verbose: args.verbose,
        })
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
