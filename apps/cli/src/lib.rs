pub mod config;
pub mod error;
pub mod quiz_file;
pub mod runner;

use std::io;

use fanio_core::QuizSession;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::runner::Runner;

pub fn run() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.default_log_filter().into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Loading quiz from {}", config.quiz_path.display());
    let quiz = quiz_file::load_quiz(&config.quiz_path)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = QuizSession::with_rng(quiz, config.settings.clone(), &mut rng)?;

    let stdin = io::stdin();
    let mut runner = Runner::new(stdin.lock(), io::stdout(), config.round_length);
    let summary = runner.play(&mut session, config.top_score, &mut rng)?;

    tracing::info!(
        completed = summary.completed,
        total_score = summary.score.total_score,
        "Game over"
    );

    Ok(())
}
