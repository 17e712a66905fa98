//! Serial mode: one session on one line.

use std::future::Future;

use tracing::info;
use vt52_engine::{run_program, SessionReport};
use vt52_transport::{SerialSettings, SerialTransport, Transport};
use vt52_types::Program;

use crate::config::SessionSettings;
use crate::error::DispatchError;
use crate::log_report;

/// Open the line and run `program` once. Stops early when `shutdown` resolves.
pub async fn run_serial<F>(
    settings: &SerialSettings,
    program: Program,
    session: &SessionSettings,
    shutdown: F,
) -> Result<(), DispatchError>
where
    F: Future<Output = ()>,
{
    let transport = SerialTransport::open(settings)?;
    if serve_line(transport, program, session, shutdown).await.is_none() {
        info!(port = %settings.path, "interrupted");
    }
    Ok(())
}

/// Run one session on an open line.
///
/// Returns `None` when `shutdown` wins. The session and its transport are
/// dropped at that point, which releases the line.
pub async fn serve_line<T, F>(
    transport: T,
    program: Program,
    session: &SessionSettings,
    shutdown: F,
) -> Option<SessionReport>
where
    T: Transport,
    F: Future<Output = ()>,
{
    let options = session.options(rand::random());

    tokio::select! {
        report = run_program(program, transport, options) => {
            log_report(&report);
            Some(report)
        }
        () = shutdown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{duplex, AsyncReadExt, AsyncWriteExt};
    use tokio::sync::oneshot;
    use vt52_transport::StreamTransport;
    use vt52_types::Pacing;

    fn session() -> SessionSettings {
        SessionSettings {
            pacing: Pacing::instant(),
            words: vec!["OWL".to_string()],
        }
    }

    #[tokio::test]
    async fn finished_session_is_reported() {
        let (line, mut terminal) = duplex(64 * 1024);
        let transport = StreamTransport::new(line, "line");

        terminal.write_all(b"OWLn").await.unwrap();
        let never = std::future::pending();
        let report = serve_line(transport, Program::Game, &session(), never).await.unwrap();

        assert!(report.outcome().is_completed());
    }

    #[tokio::test]
    async fn shutdown_mid_game_drops_the_session_and_frees_the_line() {
        let (line, mut terminal) = duplex(64 * 1024);
        let transport = StreamTransport::new(line, "line");
        let (stop_tx, stop_rx) = oneshot::channel::<()>();

        let serving = tokio::spawn(async move {
            let stop = async {
                let _ = stop_rx.await;
            };
            serve_line(transport, Program::Game, &session(), stop).await
        });

        let mut seen = Vec::new();
        let mut chunk = [0u8; 256];
        let waiting = tokio::time::timeout(Duration::from_secs(5), async {
            while !String::from_utf8_lossy(&seen).contains("Enter a letter: ") {
                let n = terminal.read(&mut chunk).await.unwrap();
                assert_ne!(n, 0, "line closed before the first prompt");
                seen.extend_from_slice(&chunk[..n]);
            }
        })
        .await;
        assert!(waiting.is_ok(), "no guess prompt");

        stop_tx.send(()).unwrap();
        assert!(serving.await.unwrap().is_none());

        let mut rest = Vec::new();
        terminal.read_to_end(&mut rest).await.unwrap();
        assert!(!String::from_utf8_lossy(&rest).contains("Goodbye"));
    }
}
