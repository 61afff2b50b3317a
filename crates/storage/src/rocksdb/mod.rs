//! RocksDB-based persistent engine
//!
//! ## Tuning
//!
//! Applied once at open from [`EngineOptions`]:
//! - LRU block cache, bloom filter (10 bits per key), Snappy compression
//! - write buffer, block size, block restart interval, max open files
//! - create-if-missing, error-if-exists, paranoid checks
//!
//! Reads skip checksum verification and fill the block cache. Writes are not
//! synced.
//!
//! ## Module Structure
//!
//! - `options.rs`: Engine tuning options
//! - `engine.rs`: `RocksEngine` and its raw-iterator cursor

mod engine;
mod options;

pub use engine::RocksEngine;
pub use options::EngineOptions;
