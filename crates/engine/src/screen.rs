//! Plays view scripts over a transport.

use tokio::time::sleep;
use vt52_term::{Script, Step};
use vt52_transport::{ConnectionLost, Transport};
use vt52_types::Pacing;

/// Send every chunk of `script` in order, honouring its pauses.
///
/// Each `Send` step is exactly one transport send, so the transport's per-send
/// delay applies once per step. Pauses are scaled through `pacing`.
pub async fn play<T>(
    transport: &mut T,
    script: &Script,
    pacing: &Pacing,
) -> Result<(), ConnectionLost>
where
    T: Transport + ?Sized,
{
    for step in script.steps() {
        match step {
            Step::Send(bytes) => transport.send(bytes).await?,
            Step::Pause(requested) => {
                let wait = pacing.pause(*requested);
                if !wait.is_zero() {
                    sleep(wait).await;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::Instant;
    use vt52_transport::MemoryTransport;

    fn sample() -> Script {
        let mut script = Script::new();
        script.text("A").pause_ms(500).text("B").pause_ms(250);
        script
    }

    #[tokio::test(start_paused = true)]
    async fn sends_each_chunk_and_waits_pauses() {
        let mut transport = MemoryTransport::new();
        let tap = transport.tap();
        let start = Instant::now();

        play(&mut transport, &sample(), &Pacing::default()).await.unwrap();

        assert_eq!(tap.sent_chunks(), vec![b"A".to_vec(), b"B".to_vec()]);
        assert!(start.elapsed() >= Duration::from_millis(750));
    }

    #[tokio::test(start_paused = true)]
    async fn instant_pacing_skips_pauses() {
        let mut transport = MemoryTransport::new();
        let start = Instant::now();

        play(&mut transport, &sample(), &Pacing::instant()).await.unwrap();

        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn stops_at_first_failed_send() {
        let mut transport = MemoryTransport::new().fail_after_sends(1);
        let tap = transport.tap();

        let err = play(&mut transport, &sample(), &Pacing::instant()).await.unwrap_err();

        assert!(matches!(err, ConnectionLost::Io(_)));
        assert_eq!(tap.sent_bytes(), b"A");
    }
}
