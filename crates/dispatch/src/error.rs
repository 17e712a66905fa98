use std::io;

use thiserror::Error;
use vt52_transport::OpenError;

/// Startup failures. Each one ends the process with a non-zero exit.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Open(#[from] OpenError),

    #[error("cannot listen on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid telnet port {0:?}: expected a number from 0 to 65535")]
    InvalidPort(String),

    #[error("invalid word {0:?}: words must be non-empty and contain only ASCII letters")]
    InvalidWord(String),
}
