//! Shared helpers for runner integration tests.

use fanio_core::{GameSettings, Question, Quiz, QuizSession};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const SEED: u64 = 3;

/// Quiz with one plain answer and one answer with alternatives.
pub fn quiz() -> Quiz {
    Quiz::new(
        "Radio Hits",
        vec![
            Question::new("https://youtu.be/wonderwall", "Wonderwall"),
            Question::new("https://youtu.be/africa", "Africa/Toto - Africa"),
        ],
    )
}

pub fn session() -> QuizSession {
    QuizSession::with_rng(quiz(), GameSettings::default(), &mut rng()).unwrap()
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// Answers in the order the session will ask for them.
pub fn answers_in_play_order(session: &QuizSession) -> Vec<String> {
    session.questions().iter().map(|q| q.answer.clone()).collect()
}
