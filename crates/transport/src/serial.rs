//! Serial line transport (8N1, bounded read wait).

use std::time::Duration;

use tokio_serial::{DataBits, FlowControl, Parity, SerialPortBuilderExt, SerialStream, StopBits};

use crate::error::OpenError;
use crate::stream::StreamTransport;
use crate::types::{
    DEFAULT_BAUDRATE, DEFAULT_SEND_DELAY_MS, DEFAULT_SERIAL_PORT, SERIAL_READ_TIMEOUT_MS,
};

/// Transport over one physical serial line.
pub type SerialTransport = StreamTransport<SerialStream>;

/// How to open the serial line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialSettings {
    pub path: String,
    pub baud_rate: u32,
    /// Longest a single receive waits for input.
    pub read_timeout: Duration,
    pub send_delay: Duration,
}

impl Default for SerialSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_SERIAL_PORT.to_string(),
            baud_rate: DEFAULT_BAUDRATE,
            read_timeout: Duration::from_millis(SERIAL_READ_TIMEOUT_MS),
            send_delay: Duration::from_millis(DEFAULT_SEND_DELAY_MS),
        }
    }
}

impl StreamTransport<SerialStream> {
    /// Open the line at 8 data bits, no parity, 1 stop bit, no flow control.
    ///
    /// Must be called from within a tokio runtime.
    pub fn open(settings: &SerialSettings) -> Result<Self, OpenError> {
        let stream = tokio_serial::new(settings.path.as_str(), settings.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(settings.read_timeout)
            .open_native_async()
            .map_err(|e| OpenError::from_serial(&settings.path, e))?;

        tracing::info!(
            port = %settings.path,
            baud = settings.baud_rate,
            "opened serial port"
        );

        Ok(StreamTransport::new(stream, settings.path.clone())
            .with_send_delay(settings.send_delay)
            .with_read_timeout(Some(settings.read_timeout)))
    }
}
