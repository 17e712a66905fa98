use vt52_terminal::engine::{DemoSession, SessionOutcome};
use vt52_terminal::term::demo_view;
use vt52_terminal::transport::MemoryTransport;
use vt52_terminal::types::{DemoPhase, Pacing};

#[tokio::test]
async fn demo_never_reads_and_closes_once() {
    let mut transport = MemoryTransport::with_input("ignored input");
    transport.push_idle(3);
    let tap = transport.tap();

    let report = DemoSession::new(transport, Pacing::instant()).run().await;

    assert!(matches!(report.outcome, SessionOutcome::Completed));
    assert_eq!(report.phases_completed, DemoPhase::ALL.to_vec());
    assert_eq!(tap.receive_calls(), 0);
    assert_eq!(tap.close_calls(), 1);
}

#[tokio::test]
async fn phase_scripts_are_sent_in_order() {
    let transport = MemoryTransport::new();
    let tap = transport.tap();
    DemoSession::new(transport, Pacing::instant()).run().await;

    let chunks = tap.sent_chunks();
    let mut cursor = demo_view::welcome().send_count();
    for phase in DemoPhase::ALL {
        let script = demo_view::phase(phase);
        let expected: Vec<Vec<u8>> = script
            .steps()
            .iter()
            .filter_map(|step| match step {
                vt52_terminal::term::Step::Send(bytes) => Some(bytes.clone()),
                vt52_terminal::term::Step::Pause(_) => None,
            })
            .collect();
        let sent = &chunks[cursor..cursor + expected.len()];
        assert_eq!(sent, &expected[..], "{phase}");
        cursor += expected.len() + demo_view::intermission().send_count();
    }
    assert_eq!(cursor + demo_view::summary().send_count(), chunks.len());
}

#[tokio::test]
async fn summary_lists_every_phase() {
    let transport = MemoryTransport::new();
    let tap = transport.tap();
    DemoSession::new(transport, Pacing::instant()).run().await;

    let text = tap.sent_text();
    let summary_at = text.find("Test Summary:").unwrap();
    for phase in DemoPhase::ALL {
        let label = format!("- {}", phase.summary_label());
        assert!(text[summary_at..].contains(&label), "{phase}");
    }
}

#[tokio::test]
async fn box_drawing_uses_relative_moves() {
    let transport = MemoryTransport::new();
    let tap = transport.tap();
    DemoSession::new(transport, Pacing::instant()).run().await;

    let bytes = tap.sent_bytes();
    let sent = |letter: u8| bytes.windows(2).any(|w| w == [0x1B, letter]);
    for letter in [b'A', b'B', b'C', b'D'] {
        assert!(sent(letter), "cursor move {}", letter as char);
    }
    assert!(sent(b'I'), "reverse line feed");
    assert!(sent(b'K'), "erase to end of line");
}
