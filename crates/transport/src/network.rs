//! Network (telnet-style) transport over an accepted TCP stream.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpStream;

use crate::stream::StreamTransport;

/// Transport over one accepted TCP connection. Receives block until data
/// arrives or the peer disconnects.
pub type NetworkTransport = StreamTransport<TcpStream>;

impl StreamTransport<TcpStream> {
    /// Wrap an accepted connection.
    ///
    /// Disables Nagle so single keystroke echoes and short escape sequences go
    /// out immediately.
    pub fn accepted(stream: TcpStream, peer: SocketAddr, send_delay: Duration) -> Self {
        if let Err(e) = stream.set_nodelay(true) {
            tracing::debug!(%peer, error = %e, "failed to set TCP_NODELAY");
        }
        StreamTransport::new(stream, peer.to_string())
            .with_send_delay(send_delay)
            .with_read_timeout(None)
    }
}
