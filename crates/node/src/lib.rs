//! dsredis - Redis command surface over a disk-backed ordered key-value store
//!
//! Configuration loading and store lifecycle. The command layer itself lives in
//! the `storage` crate.

pub mod config;
pub mod node;

pub use config::{Config, ConfigError, EngineKind, Overrides};
pub use node::{open_store, Store};
