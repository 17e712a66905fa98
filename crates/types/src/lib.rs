//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game logic, script rendering, transports, dispatch).
//!
//! # Screen Geometry
//!
//! A VT52 addresses a 24x80 screen with 1-based coordinates. Positions are
//! carried as [`CursorPosition`]; nothing here validates them against the
//! physical screen.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_SEND_DELAY_MS` | 10 | Delay after every transport send |
//! | `SERIAL_READ_TIMEOUT_MS` | 100 | Bounded wait of a serial receive |
//! | `CLEAR_SETTLE_MS` | 100 | Pause after a game screen clear |
//! | `ERASE_SETTLE_MS` | 500 | Pause after a demo screen erase |
//! | `WELCOME_PAUSE_MS` | 3000 | Pause after the welcome banner |
//! | `FAREWELL_PAUSE_MS` | 2000 | Pause after the game farewell |
//! | `INTERMISSION_MS` | 3000 | Pause between demo phases |
//! | `SUMMARY_PAUSE_MS` | 5000 | Pause after the demo summary |
//!
//! # Examples
//!
//! ```
//! use vt52_types::{CursorPosition, DemoPhase, SessionPhase, MAX_ATTEMPTS};
//!
//! let pos = CursorPosition::new(12, 5);
//! assert_eq!((pos.row, pos.col), (12, 5));
//!
//! assert_eq!(DemoPhase::ALL[0], DemoPhase::ControlCharacters);
//! assert!(SessionPhase::Closed.is_terminal());
//! assert_eq!(MAX_ATTEMPTS, 6);
//! ```

use std::fmt;
use std::time::Duration;

/// Incorrect guesses allowed per round.
pub const MAX_ATTEMPTS: u8 = 6;

/// Delay after each transport send, mimicking a real terminal's absorption rate.
pub const DEFAULT_SEND_DELAY_MS: u64 = 10;

/// Serial receive timeout; a receive never blocks longer than this.
pub const SERIAL_READ_TIMEOUT_MS: u64 = 100;

/// Default serial line speed.
pub const DEFAULT_BAUDRATE: u32 = 115_200;

/// Listen port used in telnet mode when no numeric port is given.
pub const DEFAULT_TELNET_PORT: u16 = 2323;

/// Listen address used in telnet mode.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Placeholder serial device used when `--port` is not given.
#[cfg(windows)]
pub const DEFAULT_SERIAL_PORT: &str = "COM9";

/// Placeholder serial device used when `--port` is not given.
#[cfg(not(windows))]
pub const DEFAULT_SERIAL_PORT: &str = "/dev/ttyUSB0";

/// Pause after the game clears the screen.
pub const CLEAR_SETTLE_MS: u64 = 100;

/// Pause after the demo erases the screen.
pub const ERASE_SETTLE_MS: u64 = 500;

/// Pause after the welcome banner.
pub const WELCOME_PAUSE_MS: u64 = 3000;

/// Pause after the farewell message.
pub const FAREWELL_PAUSE_MS: u64 = 2000;

/// Pause between two demo phases.
pub const INTERMISSION_MS: u64 = 3000;

/// Pause after the demo summary, before the connection is closed.
pub const SUMMARY_PAUSE_MS: u64 = 5000;

/// Cursor position on the terminal screen (1-based).
///
/// There is no enforced range: callers keep positions inside the
/// addressable area of the physical terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorPosition {
    pub row: u8,
    pub col: u8,
}

impl CursorPosition {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Which session program a connection runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Program {
    /// Interactive guess-the-animal game.
    Game,
    /// Scripted terminal test suite; never reads input.
    Demo,
}

impl Program {
    pub fn as_str(&self) -> &'static str {
        match self {
            Program::Game => "game",
            Program::Demo => "demo",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phases of the interactive game session.
///
/// ```text
/// Welcome -> RoundActive -> {RoundWon, RoundLost} -> ReplayPrompt -> {RoundActive, Closed}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    Welcome,
    RoundActive,
    RoundWon,
    RoundLost,
    ReplayPrompt,
    Closed,
}

impl SessionPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionPhase::Closed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Welcome => "welcome",
            SessionPhase::RoundActive => "round_active",
            SessionPhase::RoundWon => "round_won",
            SessionPhase::RoundLost => "round_lost",
            SessionPhase::ReplayPrompt => "replay_prompt",
            SessionPhase::Closed => "closed",
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named phases of the scripted demo, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoPhase {
    ControlCharacters,
    CursorPositioning,
    EraseFunctions,
    ScrollBehavior,
    BoxDrawing,
}

impl DemoPhase {
    /// All phases in the fixed order they run.
    pub const ALL: [DemoPhase; 5] = [
        DemoPhase::ControlCharacters,
        DemoPhase::CursorPositioning,
        DemoPhase::EraseFunctions,
        DemoPhase::ScrollBehavior,
        DemoPhase::BoxDrawing,
    ];

    /// Heading shown on the terminal while the phase runs.
    pub fn title(&self) -> &'static str {
        match self {
            DemoPhase::ControlCharacters => "Control Characters Test:",
            DemoPhase::CursorPositioning => "Cursor Positioning Test:",
            DemoPhase::EraseFunctions => "Erase Functions Test:",
            DemoPhase::ScrollBehavior => "Scroll Behavior Test:",
            DemoPhase::BoxDrawing => "Box Drawing Demo:",
        }
    }

    /// Line used for this phase in the closing summary.
    pub fn summary_label(&self) -> &'static str {
        match self {
            DemoPhase::ControlCharacters => "Control Characters",
            DemoPhase::CursorPositioning => "Cursor Positioning",
            DemoPhase::EraseFunctions => "Erase Functions",
            DemoPhase::ScrollBehavior => "Hardware Scroll Operations",
            DemoPhase::BoxDrawing => "Box Drawing",
        }
    }
}

impl fmt::Display for DemoPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DemoPhase::ControlCharacters => "control_characters",
            DemoPhase::CursorPositioning => "cursor_positioning",
            DemoPhase::EraseFunctions => "erase_functions",
            DemoPhase::ScrollBehavior => "scroll_behavior",
            DemoPhase::BoxDrawing => "box_drawing",
        };
        f.write_str(name)
    }
}

/// Output pacing applied to every session.
///
/// `send_delay` follows every transport send; `pauses` enables the fixed,
/// choreographed waits between screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub send_delay: Duration,
    pub pauses: bool,
}

impl Pacing {
    /// No delays at all. Useful for tests and offline rendering.
    pub const fn instant() -> Self {
        Self {
            send_delay: Duration::ZERO,
            pauses: false,
        }
    }

    /// Effective length of a choreographed pause.
    pub fn pause(&self, requested: Duration) -> Duration {
        if self.pauses {
            requested
        } else {
            Duration::ZERO
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            send_delay: Duration::from_millis(DEFAULT_SEND_DELAY_MS),
            pauses: true,
        }
    }
}
