//! # Accept Loop
//!
//! Both services bind a TCP listener and hand each accepted socket to a
//! per-connection handler. The [`ServeMode`] decides whether that happens once
//! or forever.

use std::future::Future;
use std::net::SocketAddr;

use log::{debug, error, info};
use tokio::net::TcpListener;

use super::config::ServeMode;
use super::connection::Connection;
use super::error::{ExchangeError, Result};

/// Bind a listener on `address`.
pub async fn bind(address: &str) -> Result<TcpListener> {
    TcpListener::bind(address)
        .await
        .map_err(|source| ExchangeError::Bind {
            addr: address.to_string(),
            source,
        })
}

/// Accept connections on `listener` and run `handler` for each one.
///
/// - [`ServeMode::Single`]: accepts one connection, awaits its handler, then
///   drops the listener and returns the handler's result. A second client will
///   find the port closed.
/// - [`ServeMode::Forever`]: spawns one task per connection and never returns
///   unless accepting fails. Handler errors are logged, not propagated.
pub async fn serve<F, Fut>(
    listener: TcpListener,
    mode: ServeMode,
    name: &str,
    handler: F,
) -> Result<()>
where
    F: Fn(Connection, SocketAddr) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    match mode {
        ServeMode::Single => {
            let (socket, addr) = listener.accept().await?;
            info!("🔗 {} accepted connection from {}", name, addr.ip());
            drop(listener);
            handler(Connection::new(socket), addr).await
        }
        ServeMode::Forever => loop {
            match listener.accept().await {
                Ok((socket, addr)) => {
                    info!("🔗 {} accepted connection from {}", name, addr.ip());

                    let handler = handler.clone();
                    let name = name.to_string();
                    tokio::spawn(async move {
                        match handler(Connection::new(socket), addr).await {
                            Ok(()) => debug!("🔌 {} closed connection from {}", name, addr),
                            Err(e) => error!("❌ {} failed serving {}: {}", name, addr, e),
                        }
                    });
                }
                Err(e) => error!("❌ Accept error: {}", e),
            }
        },
    }
}
