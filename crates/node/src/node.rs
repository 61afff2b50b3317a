//! Store lifecycle
//!
//! Opens the configured engine and wraps it in a [`DiskStore`]. Open failures
//! are returned to the caller; nothing here terminates the process.

use crate::config::{EngineKind, StorageConfig};
use storage::{DiskStore, KeyspaceNotifier, KvEngine, MemoryEngine, RocksEngine, StoreError};
use tracing::info;

/// A store whose engine is chosen at runtime
pub type Store = DiskStore<Box<dyn KvEngine>>;

/// Open the engine described by `config`
pub fn open_store(
    config: &StorageConfig,
    notifier: Box<dyn KeyspaceNotifier>,
) -> Result<Store, StoreError> {
    let engine: Box<dyn KvEngine> = match config.engine {
        EngineKind::Memory => {
            info!("Opening in-memory store");
            Box::new(MemoryEngine::new())
        }
        EngineKind::Rocksdb => {
            info!("Opening RocksDB store at {:?}", config.data_dir);
            Box::new(RocksEngine::open(&config.data_dir, &config.engine_options())?)
        }
    };

    Ok(DiskStore::with_notifier(engine, notifier))
}
