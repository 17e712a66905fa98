//! Word list and picker for the guessing game.

use crate::rng::SimpleRng;

/// Built-in target words.
pub const ANIMALS: [&str; 15] = [
    "LION", "TIGER", "BEAR", "ELEPHANT", "GIRAFFE", "ZEBRA", "MONKEY", "KANGAROO", "PENGUIN",
    "DOLPHIN", "SNAKE", "EAGLE", "WOLF", "FOX", "DEER",
];

/// Owned copy of the built-in list, as accepted by the session options.
pub fn default_words() -> Vec<String> {
    ANIMALS.iter().map(|w| (*w).to_string()).collect()
}

/// Normalize a candidate target word.
///
/// Returns the uppercased word, or `None` when it is empty or contains anything
/// other than ASCII letters (such a word could never be completed by single-letter
/// guesses).
pub fn normalize_word(word: &str) -> Option<String> {
    let word = word.trim();
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(word.to_ascii_uppercase())
}

/// Uniform word selection from a list.
#[derive(Debug, Clone)]
pub struct WordPicker {
    rng: SimpleRng,
}

impl WordPicker {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Pick one word uniformly at random. `None` only for an empty list.
    pub fn pick<'a, S: AsRef<str>>(&mut self, words: &'a [S]) -> Option<&'a str> {
        if words.is_empty() {
            return None;
        }
        let idx = self.rng.next_range(words.len() as u32) as usize;
        words.get(idx).map(|w| w.as_ref())
    }
}
