use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Record of one client exchange, exported with `--report-output`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeReport {
    pub client_name: String,
    pub server_address: String,
    pub a: f64,
    pub b: f64,
    /// `None` when the exchange failed
    pub hypotenuse: Option<f64>,
    pub failure_reason: Option<String>,
    pub latency_ms: u64,
    pub finished_at: DateTime<Utc>,
}

impl ExchangeReport {
    pub fn new(
        client_name: &str,
        server_address: &str,
        (a, b): (f64, f64),
        outcome: Result<f64, String>,
        latency: Duration,
    ) -> Self {
        let (hypotenuse, failure_reason) = match outcome {
            Ok(h) => (Some(h), None),
            Err(reason) => (None, Some(reason)),
        };

        Self {
            client_name: client_name.to_string(),
            server_address: server_address.to_string(),
            a,
            b,
            hypotenuse,
            failure_reason,
            latency_ms: latency.as_millis() as u64,
            finished_at: Utc::now(),
        }
    }

    pub fn export_to_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json_string = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json_string.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_export() {
        let report = ExchangeReport::new(
            "client",
            "127.0.0.1:5000",
            (3.0, 4.0),
            Ok(5.0),
            Duration::from_millis(42),
        );

        let file = tempfile::NamedTempFile::new().unwrap();
        report.export_to_json(file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["hypotenuse"], 5.0);
        assert_eq!(parsed["latency_ms"], 42);
        assert!(parsed["failure_reason"].is_null());
    }

    #[test]
    fn test_failed_exchange_has_reason() {
        let report = ExchangeReport::new(
            "client",
            "127.0.0.1:5000",
            (1.0, 2.0),
            Err("connection refused".to_string()),
            Duration::ZERO,
        );
        assert!(report.hypotenuse.is_none());
        assert_eq!(report.failure_reason.as_deref(), Some("connection refused"));
    }
}
