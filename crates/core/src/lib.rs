//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the guessing game and the demo phase
//! sequencing. It has **zero dependencies** on terminals, networking, or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed picks the same words
//! - **Testable**: Round rules are plain method calls
//! - **Portable**: Usable from any session transport
//!
//! # Module Structure
//!
//! - [`round`]: One guess-the-animal round (target, guessed letters, attempts)
//! - [`words`]: Built-in animal list, word validation and uniform picking
//! - [`rng`]: Small LCG used for word selection
//! - [`demo`]: Cursor over the fixed demo phase order
//!
//! # Game Rules
//!
//! - A round starts with 6 attempts and an empty guess set
//! - Letters are case-insensitive; anything else is rejected
//! - Guessing a letter twice changes nothing
//! - A new letter absent from the word costs one attempt
//! - The round is won when every letter of the word has been guessed and lost
//!   when attempts reach zero
//!
//! # Example
//!
//! ```
//! use vt52_core::{GameRound, GuessOutcome, RoundStatus};
//!
//! let mut round = GameRound::new("FOX");
//! assert_eq!(round.guess('x'), GuessOutcome::Hit);
//! assert_eq!(round.guess('Q'), GuessOutcome::Miss);
//! round.guess('F');
//! round.guess('O');
//! assert_eq!(round.status(), RoundStatus::Won);
//! assert_eq!(round.attempts_left(), 5);
//! ```

pub mod demo;
pub mod rng;
pub mod round;
pub mod words;

pub use vt52_types as types;

// Re-export commonly used types for convenience
pub use demo::DemoScript;
pub use rng::SimpleRng;
pub use round::{GameRound, GuessOutcome, RoundStatus};
pub use words::{default_words, normalize_word, WordPicker, ANIMALS};
