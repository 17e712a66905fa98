//! Transport error types.

use std::io;

use thiserror::Error;

/// The peer or line is gone. Never retried; the owning session closes.
#[derive(Debug, Error)]
pub enum ConnectionLost {
    /// Orderly end of stream from the peer.
    #[error("peer closed the connection")]
    PeerClosed,

    /// The transport was already closed locally.
    #[error("connection already closed")]
    Closed,

    /// Read or write failed.
    #[error("transport i/o failure: {0}")]
    Io(#[from] io::Error),
}

/// A serial line could not be opened at startup.
#[derive(Debug, Error)]
#[error("cannot open serial port {path}: {cause}")]
pub struct OpenError {
    pub path: String,
    pub cause: OpenFailure,
}

/// Likely cause of an [`OpenError`], worded for the operator.
#[derive(Debug, Error)]
pub enum OpenFailure {
    #[error("device not found; check the port name and that the adapter is connected")]
    NotFound,

    #[error(
        "permission denied; add your user to the group owning the device (often `dialout`) \
         or close other programs using the port"
    )]
    PermissionDenied,

    #[error("unsupported line settings: {0}")]
    InvalidSettings(String),

    #[error("{0}")]
    Other(String),
}

impl OpenError {
    pub fn from_serial(path: &str, err: tokio_serial::Error) -> Self {
        use tokio_serial::ErrorKind;

        let cause = match err.kind {
            ErrorKind::NoDevice | ErrorKind::Io(io::ErrorKind::NotFound) => OpenFailure::NotFound,
            ErrorKind::Io(io::ErrorKind::PermissionDenied) => OpenFailure::PermissionDenied,
            ErrorKind::InvalidInput => OpenFailure::InvalidSettings(err.description),
            _ => OpenFailure::Other(err.description),
        };
        Self {
            path: path.to_string(),
            cause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_errors_are_classified() {
        let cases = [
            (tokio_serial::ErrorKind::NoDevice, "NotFound"),
            (
                tokio_serial::ErrorKind::Io(io::ErrorKind::NotFound),
                "NotFound",
            ),
            (
                tokio_serial::ErrorKind::Io(io::ErrorKind::PermissionDenied),
                "PermissionDenied",
            ),
            (tokio_serial::ErrorKind::InvalidInput, "InvalidSettings"),
            (tokio_serial::ErrorKind::Unknown, "Other"),
        ];
        for (kind, expected) in cases {
            let err = OpenError::from_serial("/dev/ttyX", tokio_serial::Error::new(kind, "boom"));
            let debug = format!("{:?}", err.cause);
            assert!(debug.starts_with(expected), "{debug} vs {expected}");
        }
    }

    #[test]
    fn open_error_names_port_and_cause() {
        let err = OpenError {
            path: "COM9".to_string(),
            cause: OpenFailure::PermissionDenied,
        };
        let msg = err.to_string();
        assert!(msg.contains("COM9"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn io_errors_convert_to_connection_lost() {
        let lost: ConnectionLost = io::Error::from(io::ErrorKind::BrokenPipe).into();
        assert!(matches!(lost, ConnectionLost::Io(_)));
    }
}
