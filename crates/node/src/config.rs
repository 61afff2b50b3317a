//! Configuration module for dsredis
//!
//! Supports YAML configuration files with module-based organization

use serde::Deserialize;
use std::path::PathBuf;
use storage::EngineOptions;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_yaml(&content)
    }

    /// Load configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Apply command line overrides
    ///
    /// Every field set in `overrides` replaces the loaded value; unset fields
    /// (and all engine tuning) keep what the file said.
    pub fn merge(&mut self, overrides: Overrides) {
        if let Some(engine) = overrides.engine {
            self.storage.engine = engine;
        }
        if let Some(data_dir) = overrides.data_dir {
            self.storage.data_dir = data_dir;
        }
        if let Some(level) = overrides.log_level {
            self.log.level = level;
        }
    }
}

/// Settings given on the command line, layered over the file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub engine: Option<EngineKind>,
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Which engine backs the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Persistent RocksDB engine
    #[default]
    Rocksdb,
    /// Volatile in-memory engine
    Memory,
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub engine: EngineKind,
    /// Data storage directory
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Engine tuning, passed through at open
    #[serde(flatten)]
    pub options: EngineOptions,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            data_dir: default_data_dir(),
            options: EngineOptions::default(),
        }
    }
}

impl StorageConfig {
    /// Options handed to the engine at open
    pub fn engine_options(&self) -> EngineOptions {
        self.options.clone()
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}
