//! GameView: maps `core::GameRound` into terminal scripts.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout (1-based rows, all at the left margin):
//!
//! ```text
//!  3..9   gallows
//!  12     Word: L _ O _
//!  14     Guessed letters: L O Z
//!  16     Attempts left: 5
//!  18     Enter a letter:
//!  20     result line
//!  22     Play again? (Y/N):
//! ```

use crate::core::GameRound;
use crate::encoder::Vt52Command;
use crate::script::Script;
use crate::types::{CLEAR_SETTLE_MS, FAREWELL_PAUSE_MS, MAX_ATTEMPTS, WELCOME_PAUSE_MS};

/// Gallows art, indexed by misses so far (0 = empty, 6 = complete figure).
pub const HANGMAN_STAGES: [[&str; 7]; MAX_ATTEMPTS as usize + 1] = [
    [
        "  +---+",
        "  |   |",
        "      |",
        "      |",
        "      |",
        "      |",
        "=========",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        "      |",
        "      |",
        "      |",
        "=========",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        "  |   |",
        "      |",
        "      |",
        "=========",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        " /|   |",
        "      |",
        "      |",
        "=========",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        " /|\\  |",
        "      |",
        "      |",
        "=========",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        " /|\\  |",
        " /    |",
        "      |",
        "=========",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        " /|\\  |",
        " / \\  |",
        "      |",
        "=========",
    ],
];

/// Body of the welcome banner.
pub const WELCOME_LINES: [&str; 6] = [
    "**** Guess the Animal Game ****",
    "",
    "Try to guess the animal name one letter at a time.",
    "You have 6 attempts before the game is over.",
    "",
    "Starting in 3 seconds...",
];

pub const HANGMAN_ROW: u8 = 3;
pub const WORD_ROW: u8 = 12;
pub const GUESSED_ROW: u8 = 14;
pub const ATTEMPTS_ROW: u8 = 16;
pub const PROMPT_ROW: u8 = 18;
pub const RESULT_ROW: u8 = 20;
pub const REPLAY_ROW: u8 = 22;

/// Renders game screens for a VT52.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Column every game element starts at.
    margin: u8,
}

impl Default for GameView {
    fn default() -> Self {
        Self { margin: 5 }
    }
}

impl GameView {
    pub fn new(margin: u8) -> Self {
        Self { margin }
    }

    /// Home + erase in one send, then give the terminal time to clear.
    pub fn clear_screen(&self, script: &mut Script) {
        script
            .commands(&[Vt52Command::CursorHome, Vt52Command::EraseScreen])
            .pause_ms(CLEAR_SETTLE_MS);
    }

    pub fn welcome(&self) -> Script {
        let mut script = Script::new();
        self.clear_screen(&mut script);
        script.banner(WELCOME_LINES).pause_ms(WELCOME_PAUSE_MS);
        script
    }

    /// Blank screen shown as a new round begins, before its first board.
    pub fn round_start(&self) -> Script {
        let mut script = Script::new();
        self.clear_screen(&mut script);
        script
    }

    /// Full redraw of a round in progress.
    pub fn board(&self, round: &GameRound) -> Script {
        let mut script = Script::new();
        self.clear_screen(&mut script);
        self.hangman(&mut script, round.hangman_stage());
        script
            .at(WORD_ROW, self.margin)
            .text(format!("Word: {}", round.masked_word()))
            .at(GUESSED_ROW, self.margin)
            .text(format!("Guessed letters: {}", round.guessed_display()))
            .at(ATTEMPTS_ROW, self.margin)
            .text(format!("Attempts left: {}", round.attempts_left()));
        script
    }

    pub fn guess_prompt(&self) -> Script {
        let mut script = Script::new();
        script.at(PROMPT_ROW, self.margin).text("Enter a letter: ");
        script
    }

    /// Echo of an accepted letter.
    pub fn echo(&self, letter: char) -> Script {
        let mut script = Script::new();
        script.line(letter.to_string());
        script
    }

    pub fn won(&self) -> Script {
        let mut script = Script::new();
        script
            .at(RESULT_ROW, self.margin)
            .line("Congratulations! You won!");
        script
    }

    /// Cleared screen with the complete gallows and the revealed word.
    pub fn lost(&self, round: &GameRound) -> Script {
        let mut script = Script::new();
        self.clear_screen(&mut script);
        self.hangman(&mut script, usize::from(MAX_ATTEMPTS));
        script
            .at(RESULT_ROW, self.margin)
            .line(format!("Game Over! The word was: {}", round.target()));
        script
    }

    pub fn replay_prompt(&self) -> Script {
        let mut script = Script::new();
        script.at(REPLAY_ROW, self.margin).text("Play again? (Y/N): ");
        script
    }

    pub fn farewell(&self) -> Script {
        let mut script = Script::new();
        self.clear_screen(&mut script);
        script
            .at(1, 1)
            .line("Thanks for playing! Goodbye!")
            .pause_ms(FAREWELL_PAUSE_MS);
        script
    }

    fn hangman(&self, script: &mut Script, stage: usize) {
        let art = &HANGMAN_STAGES[stage.min(HANGMAN_STAGES.len() - 1)];
        for (row, line) in (HANGMAN_ROW..).zip(art.iter()) {
            script.at(row, self.margin).text(line);
        }
    }
}
