//! Engine tuning options

use serde::Deserialize;

/// Bloom filter bits per key
pub const BLOOM_BITS_PER_KEY: f64 = 10.0;

const MB: usize = 1024 * 1024;
const KB: usize = 1024;

/// Options passed through to the engine at open
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineOptions {
    /// Block cache size in MB
    #[serde(default = "default_cache_size_mb")]
    pub cache_size_mb: usize,
    /// Write buffer size in MB
    #[serde(default = "default_write_buffer_size_mb")]
    pub write_buffer_size_mb: usize,
    /// Block size in KB
    #[serde(default = "default_block_size_kb")]
    pub block_size_kb: usize,
    #[serde(default = "default_block_restart_interval")]
    pub block_restart_interval: i32,
    #[serde(default = "default_max_open_files")]
    pub max_open_files: i32,
    #[serde(default = "default_true")]
    pub create_if_missing: bool,
    #[serde(default)]
    pub error_if_exists: bool,
    #[serde(default)]
    pub paranoid_checks: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            cache_size_mb: default_cache_size_mb(),
            write_buffer_size_mb: default_write_buffer_size_mb(),
            block_size_kb: default_block_size_kb(),
            block_restart_interval: default_block_restart_interval(),
            max_open_files: default_max_open_files(),
            create_if_missing: true,
            error_if_exists: false,
            paranoid_checks: false,
        }
    }
}

impl EngineOptions {
    pub fn cache_size_bytes(&self) -> usize {
        self.cache_size_mb * MB
    }

    pub fn write_buffer_size_bytes(&self) -> usize {
        self.write_buffer_size_mb * MB
    }

    pub fn block_size_bytes(&self) -> usize {
        self.block_size_kb * KB
    }
}

// Default value functions

fn default_cache_size_mb() -> usize {
    8
}

fn default_write_buffer_size_mb() -> usize {
    4
}

fn default_block_size_kb() -> usize {
    4
}

fn default_block_restart_interval() -> i32 {
    16
}

fn default_max_open_files() -> i32 {
    1000
}

fn default_true() -> bool {
    true
}
