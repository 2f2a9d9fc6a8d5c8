//! Answer matching for typed song-title guesses.

use crate::normalize::normalize;
use crate::types::GameSettings;
use serde::{Deserialize, Serialize};

/// Separator between alternative spellings of one answer.
pub const ALTERNATIVE_SEPARATOR: char = '/';

/// Result of comparing a typed guess to the correct answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the guess is considered correct.
    pub is_correct: bool,
    /// Similarity score between 0.0 and 100.0.
    pub similarity: f64,
    /// Whether the length-gap guard rejected the guess before scoring.
    pub length_rejected: bool,
    /// Normalized guess (for display).
    pub typed_normalized: String,
    /// Normalized correct answer (for display).
    pub correct_normalized: String,
}

/// Compare a typed guess to the correct answer under the given settings.
///
/// The guess must pass the optional length-gap guard and reach the answer
/// threshold against at least one alternative of the answer. The reported
/// correct answer is the alternative that matched best.
pub fn compare_answers(typed: &str, correct: &str, settings: &GameSettings) -> MatchResult {
    let typed_normalized = normalize(typed);

    let length_rejected = settings
        .max_length_gap
        .is_some_and(|gap| !within_length_gap(typed, correct, gap));

    let (correct_normalized, similarity) = best_alternative(&typed_normalized, correct);
    let is_correct = !length_rejected && settings.answer_threshold.accepts(similarity);

    MatchResult {
        is_correct,
        similarity,
        length_rejected,
        typed_normalized,
        correct_normalized,
    }
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows stand in for the full (m+1) x (n+1) matrix
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            curr[j] = if a_chars[i - 1] == b_chars[j - 1] {
                prev[j - 1]
            } else {
                let deletion = prev[j];
                let insertion = curr[j - 1];
                let substitution = prev[j - 1];
                1 + deletion.min(insertion).min(substitution)
            };
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity of a guess to an answer as a percentage (0.0 to 100.0).
///
/// Both strings are normalized first. Two strings that normalize to empty
/// are 100% similar. The result is not rounded.
pub fn similarity(input: &str, answer: &str) -> f64 {
    normalized_similarity(&normalize(input), &normalize(answer))
}

/// Highest [`similarity`] of a guess against any `/`-separated alternative.
pub fn best_similarity(input: &str, answer: &str) -> f64 {
    best_alternative(&normalize(input), answer).1
}

/// Normalized alternative closest to an already normalized guess, with its
/// similarity. The first alternative wins ties.
fn best_alternative(input: &str, answer: &str) -> (String, f64) {
    let mut best = (String::new(), -1.0);

    for alternative in answer.split(ALTERNATIVE_SEPARATOR) {
        let alternative = normalize(alternative);
        let score = normalized_similarity(input, &alternative);
        if score > best.1 {
            best = (alternative, score);
        }
    }

    best
}

/// Whether the normalized guess is at most `max_gap` characters shorter or
/// longer than the shortest normalized alternative of the answer.
pub fn within_length_gap(input: &str, answer: &str, max_gap: usize) -> bool {
    let input_len = normalize(input).chars().count();
    let shortest = answer
        .split(ALTERNATIVE_SEPARATOR)
        .map(|alternative| normalize(alternative).chars().count())
        .min()
        .unwrap_or(0);

    input_len.abs_diff(shortest) <= max_gap
}

fn normalized_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100.0;
    }

    let distance = levenshtein_distance(a, b);
    (max_len - distance) as f64 * 100.0 / max_len as f64
}
