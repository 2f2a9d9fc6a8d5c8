//! Question shuffling and uniform random helpers.
//!
//! Randomness here is a gameplay fairness concern, so a non-cryptographic
//! generator is enough. Every function has a `_with` form or an explicit
//! generator argument so callers and tests can seed it.

use rand::Rng;

/// Share of the song cut from each end when picking a random start offset.
const OFFSET_BOUNDARY: f64 = 0.1;

/// Return the items in a uniformly random order.
///
/// Takes ownership of the sequence and hands back the same elements
/// permuted; nothing is created or dropped. Empty and single-element
/// sequences come back unchanged.
pub fn shuffle<T>(items: Vec<T>) -> Vec<T> {
    shuffle_with(items, &mut rand::thread_rng())
}

/// Fisher-Yates shuffle driven by the given generator.
pub fn shuffle_with<T, R: Rng>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    for i in (1..items.len()).rev() {
        let j = random_number(0, i, rng);
        items.swap(i, j);
    }

    items
}

/// Uniform integer in `[min, max]`. Bounds given in the wrong order are
/// swapped.
pub fn random_number<R: Rng>(min: usize, max: usize, rng: &mut R) -> usize {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(low..=high)
}

/// Random clip start (seconds) within the middle 80% of a song.
///
/// Returns `0.0` when the duration is not a positive finite number.
pub fn random_start_offset<R: Rng>(duration_secs: f64, rng: &mut R) -> f64 {
    if !duration_secs.is_finite() || duration_secs <= 0.0 {
        return 0.0;
    }

    let boundary = duration_secs * OFFSET_BOUNDARY;
    rng.gen_range(boundary..=duration_secs - boundary)
}
