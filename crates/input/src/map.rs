//! Byte mapping from terminal input to session inputs.

/// A byte read while waiting for a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessKey {
    /// ASCII letter, already uppercased.
    Letter(char),
    /// Anything else.
    Invalid,
}

/// A byte read at the replay prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKey {
    Yes,
    No,
    Other,
}

/// Map one input byte to a guess.
pub fn guess_from_byte(byte: u8) -> GuessKey {
    if byte.is_ascii_alphabetic() {
        GuessKey::Letter(char::from(byte.to_ascii_uppercase()))
    } else {
        GuessKey::Invalid
    }
}

/// Map one input byte to a replay answer.
pub fn reply_from_byte(byte: u8) -> ReplyKey {
    match byte {
        b'Y' | b'y' => ReplyKey::Yes,
        b'N' | b'n' => ReplyKey::No,
        _ => ReplyKey::Other,
    }
}
