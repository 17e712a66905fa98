//! Demo script cursor.
//!
//! The demo runs [`DemoPhase::ALL`] in order. The only state is which phase is
//! next; what each phase emits lives in the terminal view layer.

use crate::types::DemoPhase;

static PHASES: [DemoPhase; 5] = DemoPhase::ALL;

#[derive(Debug, Clone, Default)]
pub struct DemoScript {
    next: usize,
}

impl DemoScript {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Phase that will run next, without advancing.
    pub fn peek(&self) -> Option<DemoPhase> {
        PHASES.get(self.next).copied()
    }

    /// Phases already handed out, in order.
    pub fn completed(&self) -> &'static [DemoPhase] {
        &PHASES[..self.next]
    }

    pub fn is_finished(&self) -> bool {
        self.next >= PHASES.len()
    }
}

impl Iterator for DemoScript {
    type Item = DemoPhase;

    fn next(&mut self) -> Option<DemoPhase> {
        let phase = self.peek()?;
        self.next += 1;
        Some(phase)
    }
}
