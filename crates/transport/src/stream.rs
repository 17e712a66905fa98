//! Byte-stream transport shared by the serial and network variants.

use std::io;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::ConnectionLost;
use crate::Transport;

/// A [`Transport`] over any async byte stream.
///
/// With a read timeout, `receive` gives up after that long and returns an empty
/// buffer ("nothing yet"). Without one, it waits until at least one byte
/// arrives. End of stream is always [`ConnectionLost::PeerClosed`].
#[derive(Debug)]
pub struct StreamTransport<S> {
    stream: Option<S>,
    peer: String,
    send_delay: Duration,
    read_timeout: Option<Duration>,
}

impl<S> StreamTransport<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    pub fn new(stream: S, peer: impl Into<String>) -> Self {
        Self {
            stream: Some(stream),
            peer: peer.into(),
            send_delay: Duration::ZERO,
            read_timeout: None,
        }
    }

    /// Delay applied after every send.
    pub fn with_send_delay(mut self, send_delay: Duration) -> Self {
        self.send_delay = send_delay;
        self
    }

    pub fn with_read_timeout(mut self, read_timeout: Option<Duration>) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }
}

#[async_trait]
impl<S> Transport for StreamTransport<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    async fn send(&mut self, bytes: &[u8]) -> Result<(), ConnectionLost> {
        let stream = self.stream.as_mut().ok_or(ConnectionLost::Closed)?;
        stream.write_all(bytes).await?;
        stream.flush().await?;
        if !self.send_delay.is_zero() {
            tokio::time::sleep(self.send_delay).await;
        }
        Ok(())
    }

    async fn receive(&mut self, max: usize) -> Result<Vec<u8>, ConnectionLost> {
        let stream = self.stream.as_mut().ok_or(ConnectionLost::Closed)?;
        let mut buf = vec![0u8; max.max(1)];

        let read = match self.read_timeout {
            Some(limit) => match tokio::time::timeout(limit, stream.read(&mut buf)).await {
                Ok(read) => read,
                Err(_elapsed) => return Ok(Vec::new()),
            },
            None => stream.read(&mut buf).await,
        };

        match read {
            Ok(0) => Err(ConnectionLost::PeerClosed),
            Ok(n) => {
                buf.truncate(n);
                Ok(buf)
            }
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(Vec::new()),
            Err(e) => Err(ConnectionLost::Io(e)),
        }
    }

    async fn close(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            if let Err(e) = stream.shutdown().await {
                tracing::debug!(peer = %self.peer, error = %e, "shutdown on close failed");
            }
        }
    }

    fn peer(&self) -> &str {
        &self.peer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::duplex;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn send_writes_then_waits_the_send_delay() {
        let mock = tokio_test::io::Builder::new().write(b"\x1bH").build();
        let mut transport =
            StreamTransport::new(mock, "mock").with_send_delay(Duration::from_millis(10));

        let start = Instant::now();
        transport.send(b"\x1bH").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[tokio::test]
    async fn receive_returns_available_bytes() {
        let (mut client, server) = duplex(64);
        let mut transport = StreamTransport::new(server, "duplex");

        client.write_all(b"y").await.unwrap();
        assert_eq!(transport.receive(1).await.unwrap(), b"y");
    }

    #[tokio::test(start_paused = true)]
    async fn read_timeout_yields_empty_not_lost() {
        let (mut client, server) = duplex(64);
        let mut transport = StreamTransport::new(server, "duplex")
            .with_read_timeout(Some(Duration::from_millis(100)));

        assert!(transport.receive(1).await.unwrap().is_empty());

        client.write_all(b"k").await.unwrap();
        assert_eq!(transport.receive(1).await.unwrap(), b"k");
    }

    #[tokio::test]
    async fn peer_eof_is_connection_lost() {
        let (client, server) = duplex(64);
        let mut transport = StreamTransport::new(server, "duplex");
        drop(client);

        let err = transport.receive(1).await.unwrap_err();
        assert!(matches!(err, ConnectionLost::PeerClosed));
    }

    #[tokio::test]
    async fn close_is_idempotent_and_final() {
        let (_client, server) = duplex(64);
        let mut transport = StreamTransport::new(server, "duplex");

        transport.close().await;
        transport.close().await;
        assert!(!transport.is_open());

        assert!(matches!(
            transport.send(b"x").await,
            Err(ConnectionLost::Closed)
        ));
        assert!(matches!(
            transport.receive(1).await,
            Err(ConnectionLost::Closed)
        ));
    }
}
