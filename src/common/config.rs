//! # Configuration
//!
//! Topology and behavior for the three binaries. Every field has a default, and
//! the defaults reproduce the fixed lab addressing, so a binary started without a
//! config file behaves exactly like the hard-wired deployment:
//!
//! | Role                       | Address              |
//! |----------------------------|----------------------|
//! | Calculation Service        | `10.147.19.244:5000` |
//! | Operation Service A        | `10.147.19.224:5001` |
//! | Operation Service B        | `10.147.19.225:5001` |
//! | Operation Service listener | `10.147.19.5:5001`   |

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CALCULATION_ADDRESS: &str = "10.147.19.244:5000";
pub const DEFAULT_OPERATION_A_ADDRESS: &str = "10.147.19.224:5001";
pub const DEFAULT_OPERATION_B_ADDRESS: &str = "10.147.19.225:5001";
pub const DEFAULT_OPERATION_LISTEN_ADDRESS: &str = "10.147.19.5:5001";

/// Values the client sends when none are configured.
pub const DEFAULT_A: f64 = 123456789.0;
pub const DEFAULT_B: f64 = 987654321.0;

/// Load a TOML configuration file and deserialize it into the specified type.
///
/// # Example
/// ```ignore
/// let config: CalculationConfig = load_config("config/calculation.toml")?;
/// ```
pub fn load_config<T, P>(path: P) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: T = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(config)
}

/// Load `path` if given, otherwise fall back to `T::default()`.
pub fn load_or_default<T>(path: Option<&str>) -> Result<T>
where
    T: for<'de> Deserialize<'de> + Default,
{
    match path {
        Some(path) => load_config(path),
        None => Ok(T::default()),
    }
}

/// How many connections a listener serves before it stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServeMode {
    /// Accept one connection, handle it, close the listener.
    #[default]
    Single,
    /// Accept connections until the process is stopped, one task each.
    Forever,
}

/// Where and how a service listens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListenerInfo {
    /// Name used in log lines (e.g., "operation-a")
    pub name: String,
    /// Bind address (e.g., "10.147.19.5:5001")
    pub address: String,
    pub mode: ServeMode,
}

/// A `[server]` section as written, before the role's defaults are applied.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListenerSection {
    name: Option<String>,
    address: Option<String>,
    mode: Option<ServeMode>,
}

impl ListenerSection {
    fn or_defaults(self, defaults: ListenerInfo) -> ListenerInfo {
        ListenerInfo {
            name: self.name.unwrap_or(defaults.name),
            address: self.address.unwrap_or(defaults.address),
            mode: self.mode.unwrap_or(defaults.mode),
        }
    }
}

fn operation_listener<'de, D>(deserializer: D) -> std::result::Result<ListenerInfo, D::Error>
where
    D: Deserializer<'de>,
{
    let section = ListenerSection::deserialize(deserializer)?;
    Ok(section.or_defaults(OperationConfig::default().server))
}

fn calculation_listener<'de, D>(deserializer: D) -> std::result::Result<ListenerInfo, D::Error>
where
    D: Deserializer<'de>,
{
    let section = ListenerSection::deserialize(deserializer)?;
    Ok(section.or_defaults(CalculationConfig::default().server))
}

/// Operation Service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationConfig {
    #[serde(deserialize_with = "operation_listener")]
    pub server: ListenerInfo,
}

impl Default for OperationConfig {
    fn default() -> Self {
        Self {
            server: ListenerInfo {
                name: "operation".to_string(),
                address: DEFAULT_OPERATION_LISTEN_ADDRESS.to_string(),
                mode: ServeMode::Single,
            },
        }
    }
}

/// The two Operation Services the Calculation Service delegates to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationsConfig {
    /// Operation Service that squares `a`
    pub a: String,
    /// Operation Service that squares `b`
    pub b: String,
    /// Issue both calls at once instead of `a` then `b`
    pub concurrent: bool,
    /// Per-call deadline; `None` leaves the socket defaults in charge
    pub timeout_ms: Option<u64>,
}

impl Default for OperationsConfig {
    fn default() -> Self {
        Self {
            a: DEFAULT_OPERATION_A_ADDRESS.to_string(),
            b: DEFAULT_OPERATION_B_ADDRESS.to_string(),
            concurrent: false,
            timeout_ms: None,
        }
    }
}

impl OperationsConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Calculation Service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    #[serde(deserialize_with = "calculation_listener")]
    pub server: ListenerInfo,
    pub operations: OperationsConfig,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            server: ListenerInfo {
                name: "calculation".to_string(),
                address: DEFAULT_CALCULATION_ADDRESS.to_string(),
                mode: ServeMode::Single,
            },
            operations: OperationsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientInfo {
    pub name: String,
    /// Calculation Service address
    pub server_address: String,
}

/// The pair of values the client submits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestValues {
    pub a: f64,
    pub b: f64,
}

impl Default for RequestValues {
    fn default() -> Self {
        Self {
            a: DEFAULT_A,
            b: DEFAULT_B,
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub client: ClientInfo,
    pub request: RequestValues,
}

impl Default for ClientInfo {
    fn default() -> Self {
        Self {
            name: "client".to_string(),
            server_address: DEFAULT_CALCULATION_ADDRESS.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_lab_topology() {
        let calc = CalculationConfig::default();
        assert_eq!(calc.server.address, "10.147.19.244:5000");
        assert_eq!(calc.server.mode, ServeMode::Single);
        assert_eq!(calc.operations.a, "10.147.19.224:5001");
        assert_eq!(calc.operations.b, "10.147.19.225:5001");
        assert!(calc.operations.timeout().is_none());

        assert_eq!(OperationConfig::default().server.address, "10.147.19.5:5001");

        let client = ClientConfig::default();
        assert_eq!(client.client.server_address, "10.147.19.244:5000");
        assert_eq!(client.request.a, 123456789.0);
        assert_eq!(client.request.b, 987654321.0);
    }

    #[test]
    fn test_load_calculation_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
name = "calc"
address = "127.0.0.1:6000"
mode = "forever"

[operations]
a = "127.0.0.1:6001"
b = "127.0.0.1:6002"
concurrent = true
timeout_ms = 250
"#
        )
        .unwrap();

        let config: CalculationConfig = load_config(file.path()).unwrap();
        assert_eq!(config.server.name, "calc");
        assert_eq!(config.server.mode, ServeMode::Forever);
        assert_eq!(config.operations.b, "127.0.0.1:6002");
        assert!(config.operations.concurrent);
        assert_eq!(config.operations.timeout(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[request]\na = 3.0").unwrap();

        let config: ClientConfig = load_config(file.path()).unwrap();
        assert_eq!(config.request.a, 3.0);
        assert_eq!(config.request.b, DEFAULT_B);
        assert_eq!(config.client.server_address, DEFAULT_CALCULATION_ADDRESS);
    }

    #[test]
    fn test_partial_server_section_keeps_lab_address() {
        let operation: OperationConfig = toml::from_str("[server]\nmode = \"forever\"").unwrap();
        assert_eq!(operation.server.address, DEFAULT_OPERATION_LISTEN_ADDRESS);
        assert_eq!(operation.server.name, "operation");
        assert_eq!(operation.server.mode, ServeMode::Forever);

        let calculation: CalculationConfig = toml::from_str("[server]\nname = \"calc\"").unwrap();
        assert_eq!(calculation.server.address, DEFAULT_CALCULATION_ADDRESS);
        assert_eq!(calculation.server.name, "calc");
        assert_eq!(calculation.server.mode, ServeMode::Single);
        assert_eq!(calculation.operations.a, DEFAULT_OPERATION_A_ADDRESS);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result: Result<OperationConfig> = load_config("does/not/exist.toml");
        assert!(result.is_err());

        let fallback: OperationConfig = load_or_default(None).unwrap();
        assert_eq!(fallback.server.name, "operation");
    }
}
