//! VT52 control bytes.
//!
//! Every command is `ESC` followed by one final byte; absolute positioning adds
//! two parameter bytes, each the 1-based coordinate plus [`POSITION_OFFSET`].

/// Escape control byte that starts every command.
pub const ESC: u8 = 0x1B;

pub const CURSOR_UP: u8 = b'A';
pub const CURSOR_DOWN: u8 = b'B';
pub const CURSOR_RIGHT: u8 = b'C';
pub const CURSOR_LEFT: u8 = b'D';
pub const ENTER_GRAPHICS: u8 = b'F';
pub const EXIT_GRAPHICS: u8 = b'G';
pub const CURSOR_HOME: u8 = b'H';
pub const REVERSE_LINE_FEED: u8 = b'I';
pub const ERASE_SCREEN: u8 = b'J';
pub const ERASE_TO_EOL: u8 = b'K';
pub const CURSOR_POSITION: u8 = b'Y';

/// Added to a 1-based row or column to form its parameter byte.
pub const POSITION_OFFSET: u8 = 31;

/// Largest coordinate whose parameter byte still fits in one byte.
pub const MAX_ENCODABLE_COORD: u8 = u8::MAX - POSITION_OFFSET;

// Plain control characters exercised by the test suite.
pub const BS: u8 = 0x08;
pub const TAB: u8 = 0x09;
pub const LF: u8 = 0x0A;
pub const CR: u8 = 0x0D;
