//! In-memory transport for offline runs and tests.
//!
//! Input is a queue of scripted bytes and idle polls; output is recorded one
//! chunk per send. A [`MemoryTap`] keeps access to the recording after the
//! transport has been moved into a session.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::error::ConnectionLost;
use crate::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Byte(u8),
    /// One receive that finds nothing (like a serial read timing out).
    Idle,
}

#[derive(Debug, Default)]
struct Recording {
    sent: Vec<Vec<u8>>,
    close_calls: usize,
    receive_calls: usize,
}

#[derive(Debug)]
pub struct MemoryTransport {
    input: VecDeque<Input>,
    recording: Arc<Mutex<Recording>>,
    peer: String,
    closed: bool,
    fail_after_sends: Option<usize>,
    sends: usize,
}

impl Default for MemoryTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTransport {
    /// No input: the first receive reports the peer gone.
    pub fn new() -> Self {
        Self {
            input: VecDeque::new(),
            recording: Arc::new(Mutex::new(Recording::default())),
            peer: "memory".to_string(),
            closed: false,
            fail_after_sends: None,
            sends: 0,
        }
    }

    pub fn with_input(bytes: impl AsRef<[u8]>) -> Self {
        let mut transport = Self::new();
        transport.push_input(bytes);
        transport
    }

    pub fn push_input(&mut self, bytes: impl AsRef<[u8]>) -> &mut Self {
        self.input.extend(bytes.as_ref().iter().copied().map(Input::Byte));
        self
    }

    /// Queue `count` receives that return nothing.
    pub fn push_idle(&mut self, count: usize) -> &mut Self {
        self.input.extend(std::iter::repeat(Input::Idle).take(count));
        self
    }

    /// Let `count` sends succeed, then fail every later send.
    pub fn fail_after_sends(mut self, count: usize) -> Self {
        self.fail_after_sends = Some(count);
        self
    }

    pub fn tap(&self) -> MemoryTap {
        MemoryTap {
            recording: Arc::clone(&self.recording),
        }
    }

    fn recording(&self) -> MutexGuard<'_, Recording> {
        self.recording.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn send(&mut self, bytes: &[u8]) -> Result<(), ConnectionLost> {
        if self.closed {
            return Err(ConnectionLost::Closed);
        }
        if self.fail_after_sends.is_some_and(|limit| self.sends >= limit) {
            return Err(ConnectionLost::Io(std::io::ErrorKind::BrokenPipe.into()));
        }
        self.sends += 1;
        self.recording().sent.push(bytes.to_vec());
        Ok(())
    }

    async fn receive(&mut self, max: usize) -> Result<Vec<u8>, ConnectionLost> {
        self.recording().receive_calls += 1;
        if self.closed {
            return Err(ConnectionLost::Closed);
        }

        match self.input.pop_front() {
            None => Err(ConnectionLost::PeerClosed),
            Some(Input::Idle) => Ok(Vec::new()),
            Some(Input::Byte(first)) => {
                let mut out = vec![first];
                while out.len() < max {
                    match self.input.front() {
                        Some(Input::Byte(b)) => {
                            out.push(*b);
                            self.input.pop_front();
                        }
                        _ => break,
                    }
                }
                Ok(out)
            }
        }
    }

    async fn close(&mut self) {
        self.recording().close_calls += 1;
        self.closed = true;
    }

    fn peer(&self) -> &str {
        &self.peer
    }
}

/// Read-only view of what a [`MemoryTransport`] saw.
#[derive(Debug, Clone)]
pub struct MemoryTap {
    recording: Arc<Mutex<Recording>>,
}

impl MemoryTap {
    fn recording(&self) -> MutexGuard<'_, Recording> {
        self.recording.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Each send as it was issued.
    pub fn sent_chunks(&self) -> Vec<Vec<u8>> {
        self.recording().sent.clone()
    }

    /// All sent bytes concatenated.
    pub fn sent_bytes(&self) -> Vec<u8> {
        self.recording().sent.concat()
    }

    /// Sent bytes decoded lossily, for substring assertions.
    pub fn sent_text(&self) -> String {
        String::from_utf8_lossy(&self.sent_bytes()).into_owned()
    }

    pub fn send_count(&self) -> usize {
        self.recording().sent.len()
    }

    pub fn close_calls(&self) -> usize {
        self.recording().close_calls
    }

    pub fn receive_calls(&self) -> usize {
        self.recording().receive_calls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_sends_and_closes() {
        let mut transport = MemoryTransport::new();
        let tap = transport.tap();

        transport.send(b"ab").await.unwrap();
        transport.send(b"c").await.unwrap();
        transport.close().await;
        transport.close().await;

        assert_eq!(tap.sent_chunks(), vec![b"ab".to_vec(), b"c".to_vec()]);
        assert_eq!(tap.sent_text(), "abc");
        assert_eq!(tap.close_calls(), 2);
        assert!(matches!(
            transport.send(b"x").await,
            Err(ConnectionLost::Closed)
        ));
    }

    #[tokio::test]
    async fn receive_respects_max_and_idle_polls() {
        let mut transport = MemoryTransport::with_input("ab");
        transport.push_idle(1).push_input("c");

        assert_eq!(transport.receive(1).await.unwrap(), b"a");
        assert_eq!(transport.receive(8).await.unwrap(), b"b");
        assert!(transport.receive(8).await.unwrap().is_empty());
        assert_eq!(transport.receive(8).await.unwrap(), b"c");
        assert!(matches!(
            transport.receive(1).await,
            Err(ConnectionLost::PeerClosed)
        ));
        assert_eq!(transport.tap().receive_calls(), 5);
    }

    #[tokio::test]
    async fn send_failure_after_limit() {
        let mut transport = MemoryTransport::new().fail_after_sends(1);
        transport.send(b"ok").await.unwrap();
        assert!(matches!(
            transport.send(b"no").await,
            Err(ConnectionLost::Io(_))
        ));
        assert_eq!(transport.tap().send_count(), 1);
    }
}
