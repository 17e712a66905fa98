//! Dispatcher - turns configuration into running sessions
//!
//! - serial mode opens one line and runs one session on it
//! - telnet mode listens on TCP and spawns one session task per connection
//!
//! Both stop on Ctrl-C. Each session gets its own word-picker seed.

pub mod config;
pub mod error;
pub mod logging;
pub mod serial;
pub mod server;

use tracing::{info, warn};
use vt52_engine::{SessionOutcome, SessionReport};
use vt52_types::Program;

pub use config::{Cli, Endpoint, Mode, RunConfig, ServerConfig, SessionSettings};
pub use error::DispatchError;
pub use serial::{run_serial, serve_line};
pub use server::run_server;

/// Resolve `cli` and run `program` until it finishes or Ctrl-C.
pub async fn run(cli: Cli, program: Program) -> Result<(), DispatchError> {
    let config = cli.resolve()?;
    match config.endpoint {
        Endpoint::Serial(settings) => {
            run_serial(&settings, program, &config.session, interrupted()).await
        }
        Endpoint::Network(server) => {
            run_server(server, program, config.session, interrupted(), None).await
        }
    }
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn interrupted() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

pub(crate) fn log_report(report: &SessionReport) {
    match report {
        SessionReport::Game(game) => info!(
            won = game.rounds_won,
            lost = game.rounds_lost,
            last_phase = %game.last_phase,
            completed = game.outcome.is_completed(),
            "game session ended"
        ),
        SessionReport::Demo(demo) => info!(
            phases = demo.phases_completed.len(),
            completed = demo.outcome.is_completed(),
            "demo session ended"
        ),
    }
    if let SessionOutcome::Aborted(err) = report.outcome() {
        info!(error = %err, "session aborted");
    }
}
