//! # Client Core
//!
//! Connects to the Calculation Service, writes two values, reads one.
//! The client holds no state between requests and performs no retries.

use log::info;

use crate::common::connection::Connection;
use crate::common::error::Result;

pub struct ClientCore {
    /// Name used in log lines and reports
    client_name: String,
}

impl ClientCore {
    pub fn new(client_name: String) -> Self {
        Self { client_name }
    }

    pub fn name(&self) -> &str {
        &self.client_name
    }

    /// Ask the Calculation Service at `server_address` for `sqrt(a² + b²)`.
    ///
    /// # Errors
    ///
    /// * [`ExchangeError::Connect`](crate::common::error::ExchangeError::Connect)
    ///   if the service cannot be reached
    /// * [`ExchangeError::Truncated`](crate::common::error::ExchangeError::Truncated)
    ///   if it hangs up without answering
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let core = ClientCore::new("client".to_string());
    /// let h = core.request_hypotenuse("10.147.19.244:5000", 3.0, 4.0).await?;
    /// assert_eq!(h, 5.0);
    /// ```
    pub async fn request_hypotenuse(&self, server_address: &str, a: f64, b: f64) -> Result<f64> {
        let mut conn = Connection::connect(server_address).await?;
        info!(
            "🤝 {} connected to calculation server at {}",
            self.client_name, server_address
        );

        conn.write_values(&[a, b]).await?;
        info!("📤 {} sent a = {}, b = {}", self.client_name, a, b);

        let result = conn.read_value().await?;
        info!("📥 {} received hypotenuse: {}", self.client_name, result);

        Ok(result)
    }
}
