//! # TCP Connection Abstraction
//!
//! Wraps a TCP stream and speaks the Exchange Value protocol on it:
//! the initiator writes N values, the responder writes one value back.
//!
//! ```text
//! initiator -> [8 bytes: value 1] ... [8 bytes: value N]
//! responder -> [8 bytes: result]
//! ```
//!
//! The stream is closed when the `Connection` is dropped, on success or failure.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use super::codec::{decode_value, encode_value, VALUE_SIZE};
use super::error::{ExchangeError, Result};

/// TCP connection wrapper that reads and writes fixed-width doubles.
pub struct Connection {
    /// Underlying TCP stream
    stream: TcpStream,
}

impl Connection {
    /// Create a new Connection from an existing TCP stream.
    pub fn new(stream: TcpStream) -> Self {
        Self { stream }
    }

    /// Open an outbound connection to `address`.
    ///
    /// # Example
    /// ```ignore
    /// let mut conn = Connection::connect("10.147.19.224:5001").await?;
    /// conn.write_value(3.0).await?;
    /// let squared = conn.read_value().await?;
    /// ```
    pub async fn connect(address: &str) -> Result<Self> {
        let stream = TcpStream::connect(address)
            .await
            .map_err(|source| ExchangeError::Connect {
                addr: address.to_string(),
                source,
            })?;
        Ok(Self::new(stream))
    }

    /// Read exactly one Exchange Value.
    ///
    /// # Returns
    /// - `Ok(f64)`: the decoded value
    /// - `Err(ExchangeError::Truncated)`: the peer closed before 8 bytes arrived
    /// - `Err(ExchangeError::Io)`: any other socket failure
    pub async fn read_value(&mut self) -> Result<f64> {
        let mut buf = [0u8; VALUE_SIZE];
        self.stream
            .read_exact(&mut buf)
            .await
            .map_err(ExchangeError::from_read)?;
        Ok(decode_value(buf))
    }

    /// Write one Exchange Value and flush it.
    pub async fn write_value(&mut self, value: f64) -> Result<()> {
        self.write_values(&[value]).await
    }

    /// Write several Exchange Values back to back, then flush.
    pub async fn write_values(&mut self, values: &[f64]) -> Result<()> {
        let mut data = Vec::with_capacity(values.len() * VALUE_SIZE);
        for value in values {
            data.extend_from_slice(&encode_value(*value));
        }

        self.stream.write_all(&data).await?;
        self.stream.flush().await?;

        Ok(())
    }
}
