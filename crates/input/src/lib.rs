//! Terminal input module (session-facing).
//!
//! Terminals send raw bytes one at a time. This module classifies a single byte
//! as a letter guess or a replay answer; anything else is invalid input that the
//! session ignores while its prompt stays on screen. No escape-sequence or telnet
//! option parsing happens here.

pub mod map;

pub use vt52_types as types;

pub use map::{guess_from_byte, reply_from_byte, GuessKey, ReplyKey};
