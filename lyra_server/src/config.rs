//! Configuration for a server process, loaded from a JSON file

use lyra_transport::TransportConfig;
use lyra_wire::EncoderConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_core::LevelFilter;

use std::{
    collections::HashMap,
    fs::File,
    io::BufReader,
    net::SocketAddr,
    path::{Path, PathBuf},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinLogTarget
{
    Stdout,
    Stderr,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogTarget
{
    File { filename: PathBuf },
    Builtin(BuiltinLogTarget),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel
{
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

/// One output destination for log events
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogEntry
{
    pub target: LogTarget,
    /// Module path prefixes to include; empty means everything
    #[serde(default)]
    pub modules: Vec<String>,
    pub level: Option<LogLevel>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LoggingConfig
{
    /// Directory in which file targets are created
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,
    pub default_level: Option<LogLevel>,
    #[serde(default)]
    pub module_levels: HashMap<String, LogLevel>,
    #[serde(default = "default_log_targets")]
    pub targets: Vec<LogEntry>,
}

fn default_log_dir() -> PathBuf { PathBuf::from("log") }

fn default_log_targets() -> Vec<LogEntry>
{
    vec![LogEntry {
        target: LogTarget::Builtin(BuiltinLogTarget::Stderr),
        modules: Vec::new(),
        level: Some(LogLevel::Info),
    }]
}

impl Default for LoggingConfig
{
    fn default() -> Self
    {
        Self {
            dir: default_log_dir(),
            default_level: None,
            module_levels: HashMap::new(),
            targets: default_log_targets(),
        }
    }
}

fn default_version() -> String { concat!("lyra-", env!("CARGO_PKG_VERSION")).to_string() }

fn default_listen() -> SocketAddr { SocketAddr::from(([127, 0, 0, 1], 6667)) }

/// Everything needed to run one server
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig
{
    /// Name used as the origin of server-generated lines
    pub server_name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,
    /// Message of the day, one entry per line. `None` sends `422` instead.
    #[serde(default)]
    pub motd: Option<Vec<String>>,
    #[serde(default)]
    pub transport: TransportConfig,
    #[serde(default)]
    pub encoder: EncoderConfig,
    #[serde(default)]
    pub log: LoggingConfig,
}

impl ServerConfig
{
    /// A configuration with every optional setting at its default
    pub fn new(server_name: impl Into<String>) -> Self
    {
        Self {
            server_name: server_name.into(),
            version: default_version(),
            listen: default_listen(),
            motd: None,
            transport: TransportConfig::default(),
            encoder: EncoderConfig::default(),
            log: LoggingConfig::default(),
        }
    }

    /// Load the server configuration from a given file path
    pub fn load_file<P: AsRef<Path>>(filename: P) -> Result<Self, ConfigError>
    {
        let filename = filename.as_ref();
        let file = File::open(filename).map_err(|e| ConfigError::IoError(e, filename.to_owned()))?;
        let reader = BufReader::new(file);
        let config: Self = serde_json::from_reader(reader).map_err(|e| ConfigError::JsonError(e, filename.to_owned()))?;

        if config.server_name.is_empty()
        {
            return Err(ConfigError::FormatError("server_name must not be empty".to_string(), filename.to_owned()));
        }

        Ok(config)
    }
}

/// Errors that could happen when loading a config
#[derive(Debug, Error)]
pub enum ConfigError
{
    #[error("I/O error on {1}: {0}")]
    IoError(std::io::Error, PathBuf),
    #[error("JSON parse error in {1}: {0}")]
    JsonError(serde_json::Error, PathBuf),
    #[error("{1}: {0}")]
    FormatError(String, PathBuf),
}

impl From<LogLevel> for LevelFilter
{
    fn from(arg: LogLevel) -> LevelFilter
    {
        match arg
        {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info  => LevelFilter::INFO,
            LogLevel::Warn  => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Off   => LevelFilter::OFF,
        }
    }
}
