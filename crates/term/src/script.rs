//! Script: a pure, ordered list of sends and pauses.
//!
//! Views build scripts; the session engine plays them over a transport. One
//! [`Step::Send`] is exactly one transport send, so the per-send pacing delay
//! applies per step. Keep commands that belong to one send in one step.

use std::time::Duration;

use crate::encoder::{encode_all_into, Vt52Command};

/// Leading indentation of every banner body line.
pub const BANNER_INDENT: &str = "            ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Send(Vec<u8>),
    Pause(Duration),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Raw bytes as one send.
    pub fn send(&mut self, bytes: impl Into<Vec<u8>>) -> &mut Self {
        self.steps.push(Step::Send(bytes.into()));
        self
    }

    /// Text as one send.
    pub fn text(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.send(text.as_ref().as_bytes())
    }

    /// Text followed by CR LF, as one send.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let mut bytes = Vec::with_capacity(text.as_ref().len() + 2);
        bytes.extend_from_slice(text.as_ref().as_bytes());
        bytes.extend_from_slice(b"\r\n");
        self.send(bytes)
    }

    /// Banner block, one send per line: an empty line, each entry prefixed
    /// with [`BANNER_INDENT`], then a line holding only the indent.
    pub fn banner<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.line("");
        for line in lines {
            self.line(format!("{BANNER_INDENT}{}", line.as_ref()));
        }
        self.line(BANNER_INDENT)
    }

    pub fn command(&mut self, cmd: Vt52Command) -> &mut Self {
        self.send(cmd.encode().to_vec())
    }

    /// Several commands combined into one send.
    pub fn commands(&mut self, cmds: &[Vt52Command]) -> &mut Self {
        let mut bytes = Vec::with_capacity(cmds.len() * 4);
        encode_all_into(cmds, &mut bytes);
        self.send(bytes)
    }

    /// Absolute cursor positioning (1-based).
    pub fn at(&mut self, row: u8, col: u8) -> &mut Self {
        self.command(Vt52Command::position(row, col))
    }

    pub fn pause(&mut self, duration: Duration) -> &mut Self {
        self.steps.push(Step::Pause(duration));
        self
    }

    pub fn pause_ms(&mut self, ms: u64) -> &mut Self {
        self.pause(Duration::from_millis(ms))
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of transport sends this script performs.
    pub fn send_count(&self) -> usize {
        self.steps.iter().filter(|s| matches!(s, Step::Send(_))).count()
    }

    /// Sum of all pauses.
    pub fn total_pause(&self) -> Duration {
        self.steps
            .iter()
            .map(|s| match s {
                Step::Pause(d) => *d,
                Step::Send(_) => Duration::ZERO,
            })
            .sum()
    }

    /// Every sent byte, concatenated in order.
    pub fn wire_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for step in &self.steps {
            if let Step::Send(bytes) = step {
                out.extend_from_slice(bytes);
            }
        }
        out
    }
}
