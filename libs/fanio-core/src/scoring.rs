//! Round points and post-game rating.

use serde::{Deserialize, Serialize};

/// How quickly points decay with response time.
const SENSITIVITY: f64 = 0.01;

/// Points for a correct guess made `delta_secs` after the clip started.
///
/// An instant answer earns `max_points`; the award falls off
/// logarithmically and reaches zero at the end of the song. A song without
/// a positive finite length earns nothing; an unknown delta counts as a
/// guess at the end of the song.
pub fn calculate_points(song_length_secs: f64, delta_secs: f64, max_points: f64) -> f64 {
    if !song_length_secs.is_finite() || song_length_secs <= 0.0 {
        return 0.0;
    }

    let delta = if delta_secs.is_finite() {
        delta_secs.max(0.0)
    } else {
        song_length_secs
    };
    let b = max_points / (SENSITIVITY * song_length_secs + 1.0).log10();
    let points = max_points - b * (SENSITIVITY * delta + 1.0).log10();

    points.max(0.0)
}

/// Post-game verdict, from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostGameRating {
    Wow,
    WellDone,
    NotTooBad,
    Hmm,
    TryAgain,
    Meh,
}

impl PostGameRating {
    const ALL: [Self; 6] = [
        Self::Wow,
        Self::WellDone,
        Self::NotTooBad,
        Self::Hmm,
        Self::TryAgain,
        Self::Meh,
    ];

    /// Tier position, 0 for the best.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Wow => "WOW!!",
            Self::WellDone => "Well Done!",
            Self::NotTooBad => "Not too bad!",
            Self::Hmm => "Hmm",
            Self::TryAgain => "Let's try again.",
            Self::Meh => "Meh!",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Wow => "What a fan you are!",
            Self::WellDone => "You did amazing",
            Self::NotTooBad => "Look at you, getting closer...",
            Self::Hmm => "Good for a beginner",
            Self::TryAgain => "I know you can do better than this",
            Self::Meh => "I don't want to lie to you, that wasn't great.",
        }
    }
}

/// Rate a finished game against the best score recorded for the quiz.
///
/// Without a positive top score the player is rated [`PostGameRating::Wow`].
pub fn rate_score(current: f64, top: Option<f64>) -> PostGameRating {
    let top = match top {
        Some(top) if top.is_finite() && top > 0.0 => top,
        _ => return PostGameRating::Wow,
    };

    let max_rating = PostGameRating::ALL.len() - 1;
    let scaled = (current / top * max_rating as f64).round();
    let scaled = if scaled.is_nan() {
        0
    } else {
        scaled.clamp(0.0, max_rating as f64) as usize
    };

    PostGameRating::ALL[max_rating - scaled]
}
