//! VT52 encoder: semantic terminal commands to wire bytes.
//!
//! Everything here is pure. Positions are not clamped or validated against the
//! screen size; an out-of-range coordinate produces a well-formed command with
//! undefined meaning on the terminal. Debug builds assert that a coordinate at
//! least fits in its parameter byte.

use arrayvec::ArrayVec;

use crate::codes::*;
use crate::types::CursorPosition;

/// Longest encoded command (`ESC Y row col`).
pub const MAX_COMMAND_LEN: usize = 4;

/// One VT52 command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vt52Command {
    CursorHome,
    EraseScreen,
    EraseToEndOfLine,
    Position(CursorPosition),
    CursorUp,
    CursorDown,
    CursorRight,
    CursorLeft,
    ReverseLineFeed,
    EnterGraphics,
    ExitGraphics,
}

impl Vt52Command {
    /// Absolute cursor positioning to a 1-based (row, col).
    pub const fn position(row: u8, col: u8) -> Self {
        Vt52Command::Position(CursorPosition::new(row, col))
    }

    /// Encode into a fixed-capacity buffer (no allocation).
    pub fn encode(self) -> ArrayVec<u8, MAX_COMMAND_LEN> {
        let mut out = ArrayVec::new();
        out.push(ESC);
        match self {
            Vt52Command::Position(pos) => {
                out.push(CURSOR_POSITION);
                out.push(coord_byte(pos.row));
                out.push(coord_byte(pos.col));
            }
            Vt52Command::CursorHome => out.push(CURSOR_HOME),
            Vt52Command::EraseScreen => out.push(ERASE_SCREEN),
            Vt52Command::EraseToEndOfLine => out.push(ERASE_TO_EOL),
            Vt52Command::CursorUp => out.push(CURSOR_UP),
            Vt52Command::CursorDown => out.push(CURSOR_DOWN),
            Vt52Command::CursorRight => out.push(CURSOR_RIGHT),
            Vt52Command::CursorLeft => out.push(CURSOR_LEFT),
            Vt52Command::ReverseLineFeed => out.push(REVERSE_LINE_FEED),
            Vt52Command::EnterGraphics => out.push(ENTER_GRAPHICS),
            Vt52Command::ExitGraphics => out.push(EXIT_GRAPHICS),
        }
        out
    }

    /// Append the encoded command to `out`.
    pub fn encode_into(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.encode());
    }
}

/// Encode several commands back to back into `out`.
pub fn encode_all_into(cmds: &[Vt52Command], out: &mut Vec<u8>) {
    for cmd in cmds {
        cmd.encode_into(out);
    }
}

/// `ESC Y (row+31) (col+31)`.
pub fn encode_position(row: u8, col: u8) -> [u8; 4] {
    [ESC, CURSOR_POSITION, coord_byte(row), coord_byte(col)]
}

fn coord_byte(coord: u8) -> u8 {
    debug_assert!(
        (1..=MAX_ENCODABLE_COORD).contains(&coord),
        "VT52 coordinate {coord} outside 1..={MAX_ENCODABLE_COORD}"
    );
    coord.wrapping_add(POSITION_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letter_commands() {
        let cases = [
            (Vt52Command::CursorHome, b"\x1bH"),
            (Vt52Command::EraseScreen, b"\x1bJ"),
            (Vt52Command::EraseToEndOfLine, b"\x1bK"),
            (Vt52Command::CursorUp, b"\x1bA"),
            (Vt52Command::CursorDown, b"\x1bB"),
            (Vt52Command::CursorRight, b"\x1bC"),
            (Vt52Command::CursorLeft, b"\x1bD"),
            (Vt52Command::ReverseLineFeed, b"\x1bI"),
            (Vt52Command::EnterGraphics, b"\x1bF"),
            (Vt52Command::ExitGraphics, b"\x1bG"),
        ];
        for (cmd, expected) in cases {
            assert_eq!(cmd.encode().as_slice(), expected, "{cmd:?}");
        }
    }

    #[test]
    fn position_offsets_both_coordinates() {
        assert_eq!(encode_position(1, 1), [0x1B, b'Y', 32, 32]);
        assert_eq!(encode_position(12, 5), [0x1B, b'Y', 43, 36]);
        assert_eq!(
            Vt52Command::position(24, 80).encode().as_slice(),
            &[0x1B, b'Y', 55, 111]
        );
    }

    #[test]
    fn encode_into_appends() {
        let mut out = b"x".to_vec();
        let clear = [Vt52Command::CursorHome, Vt52Command::EraseScreen];
        encode_all_into(&clear, &mut out);
        assert_eq!(out, b"x\x1bH\x1bJ");
    }

    #[test]
    fn largest_encodable_coordinate() {
        assert_eq!(encode_position(224, 224), [0x1B, b'Y', 255, 255]);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "outside")]
    fn zero_coordinate_trips_debug_assertion() {
        let _ = encode_position(0, 1);
    }
}
