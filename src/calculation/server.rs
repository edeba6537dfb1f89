//! # Calculation Server
//!
//! ```text
//! client -> [a] [b]
//!             calculation -> operation A: [a]   <- [a²]
//!             calculation -> operation B: [b]   <- [b²]
//! server -> [sqrt(a² + b²)]
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use log::info;
use tokio::net::TcpListener;

use super::core::CalculationCore;
use crate::common::config::CalculationConfig;
use crate::common::connection::Connection;
use crate::common::error::Result;
use crate::common::listener;

pub struct CalculationServer {
    config: CalculationConfig,
    core: Arc<CalculationCore>,
    listener: TcpListener,
}

impl CalculationServer {
    pub async fn bind(config: CalculationConfig) -> Result<Self> {
        let listener = listener::bind(&config.server.address).await?;
        let core = Arc::new(CalculationCore::new(config.operations.clone()));

        Ok(Self {
            config,
            core,
            listener,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve clients according to the configured mode.
    pub async fn run(self) -> Result<()> {
        info!(
            "📡 Calculation server '{}' waiting for clients on {} (operations: a -> {}, b -> {})",
            self.config.server.name,
            self.local_addr()?,
            self.config.operations.a,
            self.config.operations.b
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

async fn handle_connection(core: Arc<CalculationCore>, mut conn: Connection) -> Result<()> {
    let a = conn.read_value().await?;
    let b = conn.read_value().await?;
    info!("📥 Received a = {}, b = {}", a, b);

    let calculation = core.compute(a, b).await;

    info!("📤 Sending result: {}", calculation.hypotenuse);
    conn.write_value(calculation.hypotenuse).await?;
    Ok(())
}
