//! Text normalization for song-title comparison.
//!
//! A title and a guess are compared only after both pass through
//! [`normalize`], which removes the cosmetic differences a player should not
//! be punished for: case, spacing, punctuation and the spelling of German
//! special letters.

/// Punctuation stripped from input in addition to whitespace.
const DISCARDED: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '[', ']', '{', '}', ';',
    '\'', ':', '"', '\\', '|', ',', '.', '<', '>', '/', '?',
];

/// Whether a character is dropped entirely during normalization.
pub fn is_discarded(c: char) -> bool {
    c.is_whitespace() || DISCARDED.contains(&c)
}

/// ASCII spelling of a lowercase special letter, if it has one.
pub fn transliterate(c: char) -> Option<&'static str> {
    match c {
        'ä' => Some("ae"),
        'ö' => Some("oe"),
        'ü' => Some("ue"),
        'ß' => Some("ss"),
        _ => None,
    }
}

/// Canonicalize raw text into the form used for distance comparison.
///
/// Characters are visited one Unicode scalar at a time. Whitespace and
/// punctuation are dropped, everything else is lowercased, and the
/// lowercase German special letters are replaced by their two-letter
/// spelling. Any other character (digits, accented letters, emoji) is kept
/// in its lowercase form.
pub fn normalize(input: &str) -> String {
    let mut clean = String::with_capacity(input.len());

    for c in input.chars().filter(|&c| !is_discarded(c)) {
        for lower in c.to_lowercase() {
            match transliterate(lower) {
                Some(spelled) => clean.push_str(spelled),
                None => clean.push(lower),
            }
        }
    }

    clean
}
