//! What a finished session reports back to the dispatcher.

use vt52_transport::ConnectionLost;
use vt52_types::{DemoPhase, SessionPhase};

/// How a session ended.
#[derive(Debug)]
pub enum SessionOutcome {
    /// The program ran to its farewell.
    Completed,
    /// The connection was lost part-way; the error that ended it.
    Aborted(ConnectionLost),
}

impl SessionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SessionOutcome::Completed)
    }

    pub(crate) fn from_result(result: Result<(), ConnectionLost>) -> Self {
        match result {
            Ok(()) => SessionOutcome::Completed,
            Err(err) => SessionOutcome::Aborted(err),
        }
    }
}

#[derive(Debug)]
pub struct GameReport {
    pub rounds_won: u32,
    pub rounds_lost: u32,
    /// `Closed` after a normal farewell, otherwise the phase the connection was
    /// lost in.
    pub last_phase: SessionPhase,
    pub outcome: SessionOutcome,
}

#[derive(Debug)]
pub struct DemoReport {
    /// Phases whose script was fully sent, in order.
    pub phases_completed: Vec<DemoPhase>,
    pub outcome: SessionOutcome,
}

/// Report of either program.
#[derive(Debug)]
pub enum SessionReport {
    Game(GameReport),
    Demo(DemoReport),
}

impl SessionReport {
    pub fn outcome(&self) -> &SessionOutcome {
        match self {
            SessionReport::Game(report) => &report.outcome,
            SessionReport::Demo(report) => &report.outcome,
        }
    }
}
