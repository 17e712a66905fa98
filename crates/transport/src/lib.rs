//! Transport module - byte-level connections to a VT52 terminal
//!
//! A session talks to its terminal through the [`Transport`] trait. Two real
//! implementations share one generic [`StreamTransport`]:
//!
//! - [`SerialTransport`]: a physical serial line, 8N1, with a short bounded read
//!   wait so a receive never blocks indefinitely
//! - [`NetworkTransport`]: one accepted TCP connection; receive blocks until a
//!   byte arrives or the peer disconnects
//!
//! [`MemoryTransport`] replays scripted input and records output without any I/O.
//!
//! # Contract
//!
//! - `send` writes the whole buffer, then waits the configured send delay
//! - `receive` returning an empty buffer means "nothing yet", never "closed"
//! - peer or line loss is always [`ConnectionLost`], from either operation
//! - `close` is idempotent; after it every operation fails with
//!   [`ConnectionLost::Closed`]

pub mod error;
pub mod memory;
pub mod network;
pub mod serial;
pub mod stream;

use async_trait::async_trait;

pub use vt52_types as types;

pub use error::{ConnectionLost, OpenError, OpenFailure};
pub use memory::{MemoryTap, MemoryTransport};
pub use network::NetworkTransport;
pub use serial::{SerialSettings, SerialTransport};
pub use stream::StreamTransport;

/// Byte-level connection to one terminal.
#[async_trait]
pub trait Transport: Send {
    /// Send all of `bytes`, then apply the pacing delay.
    async fn send(&mut self, bytes: &[u8]) -> Result<(), ConnectionLost>;

    /// Up to `max` bytes that are available now or within the transport's
    /// bounded wait. Empty means nothing arrived yet.
    async fn receive(&mut self, max: usize) -> Result<Vec<u8>, ConnectionLost>;

    /// Release the connection. Safe to call more than once.
    async fn close(&mut self);

    /// Human-readable peer label for logs.
    fn peer(&self) -> &str;
}
