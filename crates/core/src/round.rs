//! Game round module - the state of one guess-the-animal round
//!
//! A round owns the target word, the set of guessed letters and the remaining
//! attempts. It has no I/O; sessions feed it guesses and render its state.

use std::collections::BTreeSet;

use crate::types::MAX_ATTEMPTS;

/// Result of submitting one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// New letter present in the target.
    Hit,
    /// New letter absent from the target; one attempt was spent.
    Miss,
    /// Letter already guessed; nothing changed.
    Repeat,
    /// Not an ASCII letter, or the round is already over; nothing changed.
    Rejected,
}

/// Where the round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone)]
pub struct GameRound {
    target: String,
    guessed: BTreeSet<char>,
    attempts_left: u8,
}

impl GameRound {
    /// Start a round for `target`. The word is uppercased.
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_ascii_uppercase(),
            guessed: BTreeSet::new(),
            attempts_left: MAX_ATTEMPTS,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn attempts_left(&self) -> u8 {
        self.attempts_left
    }

    /// Guessed letters in alphabetical order.
    pub fn guessed(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed.iter().copied()
    }

    /// Apply one guess. Lowercase letters count as their uppercase form.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if !letter.is_ascii_alphabetic() || self.status() != RoundStatus::InProgress {
            return GuessOutcome::Rejected;
        }

        let letter = letter.to_ascii_uppercase();
        if !self.guessed.insert(letter) {
            return GuessOutcome::Repeat;
        }

        if self.target.contains(letter) {
            GuessOutcome::Hit
        } else {
            self.attempts_left = self.attempts_left.saturating_sub(1);
            GuessOutcome::Miss
        }
    }

    /// Won when every letter of the target has been guessed, lost when attempts
    /// ran out.
    pub fn status(&self) -> RoundStatus {
        if self.target.chars().all(|c| self.guessed.contains(&c)) {
            RoundStatus::Won
        } else if self.attempts_left == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// Gallows stage to draw: 0 (empty) through `MAX_ATTEMPTS` (complete figure).
    pub fn hangman_stage(&self) -> usize {
        usize::from(MAX_ATTEMPTS - self.attempts_left)
    }

    /// Target with unguessed letters replaced by `_`, each followed by a space.
    pub fn masked_word(&self) -> String {
        let mut out = String::with_capacity(self.target.len() * 2);
        for c in self.target.chars() {
            out.push(if self.guessed.contains(&c) { c } else { '_' });
            out.push(' ');
        }
        out
    }

    /// Guessed letters, sorted and separated by single spaces.
    pub fn guessed_display(&self) -> String {
        let mut out = String::with_capacity(self.guessed.len() * 2);
        for (i, c) in self.guessed.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(*c);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_round_starts_with_full_attempts() {
        let round = GameRound::new("lion");
        assert_eq!(round.target(), "LION");
        assert_eq!(round.attempts_left(), MAX_ATTEMPTS);
        assert_eq!(round.guessed().count(), 0);
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.hangman_stage(), 0);
    }

    #[test]
    fn hit_and_miss() {
        let mut round = GameRound::new("LION");
        assert_eq!(round.guess('L'), GuessOutcome::Hit);
        assert_eq!(round.attempts_left(), 6);
        assert_eq!(round.guess('Z'), GuessOutcome::Miss);
        assert_eq!(round.attempts_left(), 5);
        assert_eq!(round.hangman_stage(), 1);
    }

    #[test]
    fn lowercase_counts_as_uppercase() {
        let mut round = GameRound::new("LION");
        assert_eq!(round.guess('l'), GuessOutcome::Hit);
        assert_eq!(round.guessed_display(), "L");
        assert_eq!(round.guess('L'), GuessOutcome::Repeat);
    }

    #[test]
    fn repeat_miss_does_not_cost_an_attempt() {
        let mut round = GameRound::new("LION");
        assert_eq!(round.guess('Q'), GuessOutcome::Miss);
        assert_eq!(round.guess('Q'), GuessOutcome::Repeat);
        assert_eq!(round.attempts_left(), 5);
    }

    #[test]
    fn non_letters_are_rejected() {
        let mut round = GameRound::new("LION");
        for c in ['1', ' ', '\r', '?', 'é'] {
            assert_eq!(round.guess(c), GuessOutcome::Rejected);
        }
        assert_eq!(round.guessed().count(), 0);
        assert_eq!(round.attempts_left(), 6);
    }

    #[test]
    fn six_misses_lose() {
        let mut round = GameRound::new("LION");
        for c in ['A', 'B', 'C', 'D', 'E'] {
            assert_eq!(round.guess(c), GuessOutcome::Miss);
            assert_eq!(round.status(), RoundStatus::InProgress);
        }
        assert_eq!(round.guess('F'), GuessOutcome::Miss);
        assert_eq!(round.attempts_left(), 0);
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.hangman_stage(), 6);

        // Finished rounds take no more guesses.
        assert_eq!(round.guess('L'), GuessOutcome::Rejected);
    }

    #[test]
    fn win_in_any_order() {
        let orders = [
            ['L', 'I', 'O', 'N'],
            ['N', 'O', 'I', 'L'],
            ['O', 'L', 'N', 'I'],
            ['I', 'N', 'L', 'O'],
        ];
        for order in orders {
            let mut round = GameRound::new("LION");
            for (i, c) in order.iter().enumerate() {
                assert_eq!(
                    round.status(),
                    RoundStatus::InProgress,
                    "order {order:?} step {i}"
                );
                assert_eq!(round.guess(*c), GuessOutcome::Hit);
            }
            assert_eq!(round.status(), RoundStatus::Won, "order {order:?}");
        }
    }

    #[test]
    fn repeated_letters_in_target_need_one_guess() {
        let mut round = GameRound::new("KANGAROO");
        for c in ['K', 'A', 'N', 'G', 'R', 'O'] {
            round.guess(c);
        }
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn masked_word_and_guessed_display() {
        let mut round = GameRound::new("LION");
        assert_eq!(round.masked_word(), "_ _ _ _ ");
        round.guess('O');
        round.guess('Z');
        round.guess('L');
        assert_eq!(round.masked_word(), "L _ O _ ");
        assert_eq!(round.guessed_display(), "L O Z");
    }
}
