//! # Operation Caller
//!
//! Sends a single value to an Operation Service and waits for its square.
//! Every call opens a fresh connection and closes it afterwards.
//!
//! If anything goes wrong (refused, reset, unreachable, truncated reply,
//! timeout) the caller computes the square itself. There is no retry.

use std::fmt;
use std::time::Duration;

use log::{info, warn};

use crate::common::connection::Connection;
use crate::common::error::{ExchangeError, Result};
use crate::operation::core::square;

/// Which path produced a squared value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareSource {
    /// Answered by the Operation Service at this address
    Remote(String),
    /// Computed in-process after the remote call failed
    Local,
}

impl fmt::Display for SquareSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareSource::Remote(addr) => write!(f, "remote ({})", addr),
            SquareSource::Local => write!(f, "local fallback"),
        }
    }
}

/// A squared value and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Squared {
    pub value: f64,
    pub source: SquareSource,
}

/// Client side of the Operation Service exchange.
#[derive(Debug, Clone, Default)]
pub struct OperationCaller {
    /// Deadline for the whole exchange; `None` waits as long as the socket does
    timeout: Option<Duration>,
}

impl OperationCaller {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    /// Ask the Operation Service at `address` to square `value`.
    ///
    /// # Returns
    /// - `Ok(f64)`: the remote result
    /// - `Err`: connect, I/O, truncation or timeout failure
    pub async fn call(&self, address: &str, value: f64) -> Result<f64> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, exchange(address, value))
                .await
                .map_err(|_| ExchangeError::Timeout(limit))?,
            None => exchange(address, value).await,
        }
    }

    /// Square `value` remotely, or locally if the remote call fails.
    ///
    /// `label` identifies the call in log lines (e.g., "a").
    pub async fn square_or_fallback(&self, label: &str, address: &str, value: f64) -> Squared {
        match self.call(address, value).await {
            Ok(result) => {
                info!(
                    "✅ Operation server at {} squared {} = {}: {}",
                    address, label, value, result
                );
                Squared {
                    value: result,
                    source: SquareSource::Remote(address.to_string()),
                }
            }
            Err(e) => {
                let result = square(value);
                warn!(
                    "⚠️  Operation server at {} not responding ({}). Squared {} locally: {}",
                    address, e, label, result
                );
                Squared {
                    value: result,
                    source: SquareSource::Local,
                }
            }
        }
    }
}

async fn exchange(address: &str, value: f64) -> Result<f64> {
    let mut conn = Connection::connect(address).await?;
    conn.write_value(value).await?;
    conn.read_value().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config::{ListenerInfo, OperationConfig, ServeMode};
    use crate::operation::OperationServer;
    use tokio::net::TcpListener;

    /// Reserve a port and release it, leaving nothing listening there.
    ///
    /// The OS may hand the port to another test afterwards; the window is small
    /// and a live answer would only flip one assertion to `Remote`.
    async fn closed_address() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_unreachable_service_falls_back() {
        let address = closed_address().await;
        let caller = OperationCaller::default();

        assert!(matches!(
            caller.call(&address, 3.0).await,
            Err(ExchangeError::Connect { .. })
        ));

        let squared = caller.square_or_fallback("a", &address, 3.0).await;
        assert_eq!(squared.value, 9.0);
        assert_eq!(squared.source, SquareSource::Local);
    }

    #[tokio::test]
    async fn test_live_service_answers_remotely() {
        let server = OperationServer::bind(OperationConfig {
            server: ListenerInfo {
                name: "operation-test".to_string(),
                address: "127.0.0.1:0".to_string(),
                mode: ServeMode::Single,
            },
        })
        .await
        .unwrap();
        let address = server.local_addr().unwrap().to_string();
        let handle = tokio::spawn(server.run());

        let caller = OperationCaller::default();
        let squared = caller.square_or_fallback("a", &address, 12.0).await;
        assert_eq!(squared.value, 144.0);
        assert_eq!(squared.source, SquareSource::Remote(address));

        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_silent_service_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();

        // Accept and hold the socket open without replying.
        let hold = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        let caller = OperationCaller::new(Some(Duration::from_millis(100)));
        let squared = caller.square_or_fallback("b", &address, 4.0).await;
        assert_eq!(squared.value, 16.0);
        assert_eq!(squared.source, SquareSource::Local);

        hold.abort();
    }

    #[test]
    fn test_source_display() {
        assert_eq!(SquareSource::Local.to_string(), "local fallback");
        assert_eq!(
            SquareSource::Remote("127.0.0.1:5001".to_string()).to_string(),
            "remote (127.0.0.1:5001)"
        );
    }
}
