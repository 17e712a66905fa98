//! DemoView: the fixed choreography of the VT52 test suite.
//!
//! Each phase is a pure [`Script`]. Pauses give slow hardware time to finish
//! erasing and scrolling so the effect is visible.

use crate::codes::{BS, CR, LF};
use crate::encoder::Vt52Command;
use crate::script::Script;
use crate::types::{DemoPhase, ERASE_SETTLE_MS, INTERMISSION_MS, SUMMARY_PAUSE_MS, WELCOME_PAUSE_MS};

/// Body of the welcome banner.
pub const WELCOME_LINES: [&str; 10] = [
    "**** VT52 Terminal Test Suite ****",
    "",
    "Testing implemented features:",
    "- Control characters (BS, LF, CR, TAB)",
    "- Cursor positioning (abs/rel)",
    "- Erase functions (EOL/screen)",
    "- Hardware scroll behavior",
    "- Box drawing",
    "",
    "Starting in 3 seconds...",
];

/// Marks placed by the absolute positioning test, as (row, col).
pub const POSITION_MARKS: [(u8, u8); 6] =
    [(5, 10), (5, 30), (10, 10), (10, 30), (15, 10), (15, 30)];

const SUMMARY_CLOSING: &str = "Tests complete! Connection will close in 5 seconds.";

/// Row used for the "continue" notice between phases.
pub const STATUS_ROW: u8 = 22;

/// Short pause after each drawn step of a test.
const STEP_MS: u64 = 100;
/// Pause between relative cursor moves.
const MOVE_MS: u64 = 200;
/// Pause for one hardware scroll.
const SCROLL_MS: u64 = 1000;
/// Hold time at the end of a test.
const HOLD_MS: u64 = 2000;

/// Home and erase as two sends, then wait for the erase to finish.
fn erase_screen(script: &mut Script) {
    script
        .command(Vt52Command::CursorHome)
        .command(Vt52Command::EraseScreen)
        .pause_ms(ERASE_SETTLE_MS);
}

fn title(script: &mut Script, phase: DemoPhase) {
    script.at(1, 1).text(format!("{}\r\n\n", phase.title()));
}

pub fn welcome() -> Script {
    let mut script = Script::new();
    erase_screen(&mut script);
    script.banner(WELCOME_LINES).pause_ms(WELCOME_PAUSE_MS);
    script
}

/// Script for one phase.
pub fn phase(phase: DemoPhase) -> Script {
    match phase {
        DemoPhase::ControlCharacters => control_characters(),
        DemoPhase::CursorPositioning => cursor_positioning(),
        DemoPhase::EraseFunctions => erase_functions(),
        DemoPhase::ScrollBehavior => scroll_behavior(),
        DemoPhase::BoxDrawing => box_drawing(),
    }
}

/// Notice shown after every phase.
pub fn intermission() -> Script {
    let mut script = Script::new();
    script
        .at(STATUS_ROW, 1)
        .text("\r3 seconds to continue...")
        .pause_ms(INTERMISSION_MS);
    script
}

/// Closing summary listing every phase.
pub fn summary() -> Script {
    let mut script = Script::new();
    erase_screen(&mut script);
    let labels = DemoPhase::ALL.map(|phase| format!("- {}", phase.summary_label()));
    let mut lines = vec!["Test Summary:".to_string()];
    lines.extend(labels);
    lines.push(String::new());
    lines.push(SUMMARY_CLOSING.to_string());

    script.at(1, 1).banner(lines).pause_ms(SUMMARY_PAUSE_MS);
    script
}

fn control_characters() -> Script {
    let mut script = Script::new();
    script
        .command(Vt52Command::CursorHome)
        .command(Vt52Command::EraseScreen);
    title(&mut script, DemoPhase::ControlCharacters);

    // Backspace twice over "ABC" leaves "AXY".
    script
        .text("Backspace Test: ")
        .text("ABC")
        .send([BS])
        .send([BS])
        .text("XY")
        .text("\r\n");

    // "Third" overwrites "Second" after the bare CR.
    script
        .text("LF/CR Test:\r\n")
        .text("First")
        .send([LF])
        .text("Second")
        .send([CR])
        .text("Third")
        .text("\r\n\n");

    script.text("Tab Test:\r\n").text("1\t2\t3\t4").pause_ms(HOLD_MS);
    script
}

fn cursor_positioning() -> Script {
    let mut script = Script::new();
    erase_screen(&mut script);
    title(&mut script, DemoPhase::CursorPositioning);

    script.text("Testing absolute cursor positioning...\r\n");
    for (row, col) in POSITION_MARKS {
        script.at(row, col).text("X").pause_ms(MOVE_MS);
    }
    script.pause_ms(1000);

    script.at(12, 20).text("O").pause_ms(MOVE_MS);
    let legs = [
        (Vt52Command::CursorUp, "^"),
        (Vt52Command::CursorRight, ">"),
        (Vt52Command::CursorDown, "v"),
        (Vt52Command::CursorLeft, "<"),
    ];
    for (cmd, mark) in legs {
        for _ in 0..3 {
            script.command(cmd).pause_ms(MOVE_MS).text(mark);
        }
    }
    script.pause_ms(HOLD_MS);
    script
}

fn erase_functions() -> Script {
    let mut script = Script::new();
    erase_screen(&mut script);
    title(&mut script, DemoPhase::EraseFunctions);

    for row in 5..20u8 {
        script
            .at(row, 1)
            .text(format!("Line {row:02}: Testing erase functions..."))
            .pause_ms(STEP_MS);
    }
    script.pause_ms(HOLD_MS);

    script
        .text("\r\nTesting Erase to End of Line (ESC K):")
        .at(10, 20)
        .command(Vt52Command::EraseToEndOfLine)
        .pause_ms(ERASE_SETTLE_MS)
        .at(10, 40)
        .text("<-- Erased to here")
        .pause_ms(HOLD_MS);

    script
        .text("\r\nTesting Erase Screen (ESC J) - should home cursor:")
        .at(15, 20)
        .command(Vt52Command::EraseScreen)
        .pause_ms(ERASE_SETTLE_MS)
        .text("This should be at home position (1,1)")
        .pause_ms(HOLD_MS);
    script
}

fn scroll_behavior() -> Script {
    let mut script = Script::new();
    erase_screen(&mut script);
    title(&mut script, DemoPhase::ScrollBehavior);
    erase_screen(&mut script);

    for row in 1..23u8 {
        script
            .at(row, 1)
            .text(format!("Line {row:02}: test content"))
            .pause_ms(STEP_MS);
    }
    script.pause_ms(HOLD_MS);

    // Forward scroll: writing past the bottom row scrolls the screen up.
    script.text("\r\nTesting forward scroll...");
    erase_screen(&mut script);
    script.at(22, 1);
    for i in 0..7 {
        script
            .text(format!("New line {i} - testing scroll\r\n"))
            .pause_ms(SCROLL_MS);
    }
    script.pause_ms(HOLD_MS);

    script
        .command(Vt52Command::EraseScreen)
        .pause_ms(ERASE_SETTLE_MS)
        .text("Testing reverse scroll (ESC I):\r\n")
        .at(10, 1);
    for i in 1..=5 {
        script
            .command(Vt52Command::ReverseLineFeed)
            .pause_ms(SCROLL_MS)
            .text(format!("Reverse scroll line {i}\r"));
    }
    script.pause_ms(HOLD_MS);
    script
}

fn box_drawing() -> Script {
    let mut script = Script::new();
    erase_screen(&mut script);
    title(&mut script, DemoPhase::BoxDrawing);

    script.at(5, 10);
    for _ in 0..10 {
        script.text("*").pause_ms(STEP_MS);
    }
    // Each edge step moves, then backs over the column the '*' will occupy.
    let edges = [
        (Vt52Command::CursorDown, 5),
        (Vt52Command::CursorLeft, 10),
        (Vt52Command::CursorUp, 5),
    ];
    for (cmd, count) in edges {
        for _ in 0..count {
            script
                .command(cmd)
                .pause_ms(STEP_MS)
                .command(Vt52Command::CursorLeft)
                .text("*");
        }
    }
    script.pause_ms(HOLD_MS);
    script
}
