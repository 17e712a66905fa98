//! Scripted terminal test suite. Sends only; never reads.

use tracing::{debug, info, Instrument};
use vt52_core::DemoScript;
use vt52_term::{demo_view, Script};
use vt52_transport::{ConnectionLost, Transport};
use vt52_types::Pacing;

use crate::report::{DemoReport, SessionOutcome};
use crate::screen;

pub struct DemoSession<T> {
    transport: T,
    pacing: Pacing,
    script: DemoScript,
}

impl<T: Transport> DemoSession<T> {
    pub fn new(transport: T, pacing: Pacing) -> Self {
        Self {
            transport,
            pacing,
            script: DemoScript::new(),
        }
    }

    /// Play welcome, every phase and the summary, then close the transport.
    pub async fn run(mut self) -> DemoReport {
        let span = tracing::info_span!("demo", peer = %self.transport.peer());
        async move {
            let result = self.drive().await;
            match &result {
                Ok(()) => info!("demo finished"),
                Err(err) => info!(
                    completed = self.script.completed().len(),
                    error = %err,
                    "connection lost"
                ),
            }
            self.transport.close().await;

            DemoReport {
                phases_completed: self.script.completed().to_vec(),
                outcome: SessionOutcome::from_result(result),
            }
        }
        .instrument(span)
        .await
    }

    async fn drive(&mut self) -> Result<(), ConnectionLost> {
        self.play(&demo_view::welcome()).await?;

        while let Some(phase) = self.script.peek() {
            debug!(%phase, "phase started");
            self.play(&demo_view::phase(phase)).await?;
            self.script.next();
            self.play(&demo_view::intermission()).await?;
        }

        self.play(&demo_view::summary()).await
    }

    async fn play(&mut self, script: &Script) -> Result<(), ConnectionLost> {
        screen::play(&mut self.transport, script, &self.pacing).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::Instant;
    use vt52_transport::MemoryTransport;
    use vt52_types::DemoPhase;

    #[tokio::test]
    async fn runs_every_phase_in_order_without_reading() {
        let transport = MemoryTransport::new();
        let tap = transport.tap();

        let report = DemoSession::new(transport, Pacing::instant()).run().await;

        assert!(report.outcome.is_completed());
        assert_eq!(report.phases_completed, DemoPhase::ALL.to_vec());
        assert_eq!(tap.receive_calls(), 0);
        assert_eq!(tap.close_calls(), 1);

        let text = tap.sent_text();
        let mut last = 0;
        for phase in DemoPhase::ALL {
            let at = text[last..]
                .find(phase.title())
                .map(|i| i + last)
                .unwrap_or_else(|| panic!("{phase} title missing or out of order"));
            last = at;
        }
        assert_eq!(text.matches("3 seconds to continue...").count(), 5);
        assert!(text.contains("Test Summary:"));
        assert!(text.contains("Connection will close in 5 seconds."));
    }

    #[tokio::test]
    async fn output_matches_concatenated_views() {
        let transport = MemoryTransport::new();
        let tap = transport.tap();
        DemoSession::new(transport, Pacing::instant()).run().await;

        let mut expected = demo_view::welcome().wire_bytes();
        for phase in DemoPhase::ALL {
            expected.extend(demo_view::phase(phase).wire_bytes());
            expected.extend(demo_view::intermission().wire_bytes());
        }
        expected.extend(demo_view::summary().wire_bytes());
        assert_eq!(tap.sent_bytes(), expected);
    }

    #[tokio::test]
    async fn send_failure_stops_the_demo() {
        let first_phase = demo_view::phase(DemoPhase::ControlCharacters);
        let sends = demo_view::welcome().send_count() + first_phase.send_count();
        let transport = MemoryTransport::new().fail_after_sends(sends);
        let tap = transport.tap();

        let report = DemoSession::new(transport, Pacing::instant()).run().await;

        assert!(matches!(
            report.outcome,
            SessionOutcome::Aborted(ConnectionLost::Io(_))
        ));
        assert_eq!(report.phases_completed, vec![DemoPhase::ControlCharacters]);
        assert_eq!(tap.close_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn takes_at_least_the_scripted_time() {
        let transport = MemoryTransport::new();
        let start = Instant::now();

        DemoSession::new(transport, Pacing::default()).run().await;

        // Welcome 3.5 s, five 3 s intermissions and the 5.5 s summary.
        assert!(start.elapsed() >= Duration::from_secs(24));
    }
}
