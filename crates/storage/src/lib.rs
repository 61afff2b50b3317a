pub mod batch;
pub mod key_encoding;
pub mod memory;
pub mod notify;
pub mod rocksdb;
pub mod store;
pub mod traits;

#[cfg(test)]
mod test_util;

// Re-export commonly used types
pub use batch::{BatchOp, WriteBatch};
pub use key_encoding::Namespace;
pub use memory::MemoryEngine;
pub use notify::{ChannelNotifier, KeyEvent, KeyspaceNotifier, NoopNotifier};
pub use crate::rocksdb::{EngineOptions, RocksEngine};
pub use store::DiskStore;
pub use traits::{KvCursor, KvEngine, StoreError, StoreResult};
