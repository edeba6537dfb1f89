//! # Exchange Errors
//!
//! The only failure kind in the system is an I/O failure, but callers want to
//! know *where* it happened: binding a listener, reaching a peer, or mid-exchange.

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Failure of a listener, an outbound connection, or a value exchange.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// Peer closed the connection before a full 8-byte value arrived.
    #[error("connection closed before a complete value was received")]
    Truncated,

    #[error("exchange timed out after {0:?}")]
    Timeout(Duration),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ExchangeError>;

impl ExchangeError {
    /// Map a read error, turning an early EOF into [`ExchangeError::Truncated`].
    pub(crate) fn from_read(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            ExchangeError::Truncated
        } else {
            ExchangeError::Io(e)
        }
    }
}
