//! Session engine - drives one program over one transport
//!
//! A session owns its [`Transport`](vt52_transport::Transport) for its whole
//! life and closes it exactly once when it ends, whether the program finished
//! or the connection was lost.
//!
//! - [`GameSession`]: interactive guess-the-animal game
//! - [`DemoSession`]: scripted terminal test suite, send-only
//! - [`screen::play`]: sends a view [`Script`](vt52_term::Script), honouring pacing

pub mod demo;
pub mod game;
pub mod report;
pub mod screen;

use vt52_transport::Transport;
use vt52_types::Program;

pub use demo::DemoSession;
pub use game::{GameOptions, GameSession};
pub use report::{DemoReport, GameReport, SessionOutcome, SessionReport};

/// Run `program` over `transport`. The demo uses only the pacing from `options`.
pub async fn run_program<T: Transport>(
    program: Program,
    transport: T,
    options: GameOptions,
) -> SessionReport {
    match program {
        Program::Game => SessionReport::Game(GameSession::new(transport, options).run().await),
        Program::Demo => {
            SessionReport::Demo(DemoSession::new(transport, options.pacing).run().await)
        }
    }
}
