//! Configuration of the valstream daemon.
//!
//! The configuration is read from a TOML file. Every key can be overridden by an
//! environment variable named after its path, e.g. `VALSTREAM__TRANSPORT__URL`.

use core::fmt;
use core::str::FromStr;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

mod utils;

pub use config::ConfigError;

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "VALSTREAM";

/// valstream configuration options
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// A custom human-readable name for this instance
    pub moniker: String,

    /// Log configuration options
    pub logging: LoggingConfig,

    /// Stream connection options
    pub transport: TransportConfig,

    /// Storage options
    pub store: StoreConfig,

    /// Metrics configuration options
    pub metrics: MetricsConfig,

    /// Runtime configuration options
    pub runtime: RuntimeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            moniker: "valstream".to_string(),
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            store: StoreConfig::default(),
            metrics: MetricsConfig::default(),
            runtime: RuntimeConfig::default(),
        }
    }
}

/// Parses the environment variables and loads the provided config file path
/// to create a [`Config`].
pub fn load_config(path: impl AsRef<Path>, prefix: Option<&str>) -> Result<Config, ConfigError> {
    config::Config::builder()
        .add_source(config::File::from(path.as_ref()))
        .add_source(
            config::Environment::with_prefix(prefix.unwrap_or(ENV_PREFIX))
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("transport.streams"),
        )
        .build()?
        .try_deserialize()
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: LogLevel,
    pub log_format: LogFormat,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            e => Err(format!("Invalid log level: {e}")),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plaintext,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plaintext" => Ok(LogFormat::Plaintext),
            "json" => Ok(LogFormat::Json),
            e => Err(format!("Invalid log format: {e}")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Plaintext => f.write_str("plaintext"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Websocket endpoint of the validations stream
    pub url: String,

    /// Streams to subscribe to
    pub streams: Vec<String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            url: "wss://xrplcluster.com".to_string(),
            streams: vec!["validations".to_string()],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Database file; relative paths are resolved against the home directory
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn resolve(&self, home: &Path) -> PathBuf {
        home.join(&self.path)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data").join("validations.redb"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Serve Prometheus metrics
    #[serde(deserialize_with = "utils::from_anything")]
    pub enabled: bool,

    /// Address of the metrics endpoint
    #[serde(deserialize_with = "utils::from_anything")]
    pub listen_addr: SocketAddr,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            listen_addr: SocketAddr::new(Ipv4Addr::LOCALHOST.into(), 9000),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Capacity of the channel between the stream and the pipeline
    #[serde(deserialize_with = "utils::from_anything")]
    pub channel_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 1024,
        }
    }
}
