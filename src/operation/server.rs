//! # Operation Server
//!
//! Binds the configured address and answers each connection with the square of
//! the one value it receives.
//!
//! ```text
//! caller -> [value]
//! server -> [value * value]
//! ```
//!
//! In the default [`ServeMode::Single`](crate::common::config::ServeMode) the
//! server handles exactly one caller and then closes its port.

use std::net::SocketAddr;
use std::sync::Arc;

use log::info;
use tokio::net::TcpListener;

use super::core::OperationCore;
use crate::common::config::OperationConfig;
use crate::common::connection::Connection;
use crate::common::error::Result;
use crate::common::listener;

pub struct OperationServer {
    config: OperationConfig,
    core: Arc<OperationCore>,
    listener: TcpListener,
}

impl OperationServer {
    /// Bind the listener described by `config.server`.
    ///
    /// # Errors
    /// [`ExchangeError::Bind`](crate::common::error::ExchangeError::Bind) if the
    /// address is unavailable.
    pub async fn bind(config: OperationConfig) -> Result<Self> {
        let listener = listener::bind(&config.server.address).await?;
        let core = Arc::new(OperationCore::new(config.server.name.clone()));

        Ok(Self {
            config,
            core,
            listener,
        })
    }

    /// The bound address (useful when configured with port 0).
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve connections according to the configured mode.
    pub async fn run(self) -> Result<()> {
        info!(
            "📡 Operation server '{}' listening on {} ({:?} mode)",
            self.config.server.name,
            self.local_addr()?,
            self.config.server.mode
        );

        let core = self.core;
        listener::serve(
            self.listener,
            self.config.server.mode,
            &self.config.server.name,
            move |conn, _addr| handle_connection(core.clone(), conn),
        )
        .await
    }
}

/// Read one value, square it, write the result. Dropping `conn` closes it.
async fn handle_connection(core: Arc<OperationCore>, mut conn: Connection) -> Result<()> {
    let value = conn.read_value().await?;
    let result = core.square(value);
    conn.write_value(result).await?;
    Ok(())
}
