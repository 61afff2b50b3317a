//! Generic key operations for DiskStore

use crate::store::DiskStore;
use crate::traits::{KvEngine, StoreResult};
use tracing::warn;

impl<E: KvEngine> DiskStore<E> {
    /// EXISTS: presence of a single key, regardless of value length
    pub fn exists(&self, key: &[u8]) -> StoreResult<bool> {
        Ok(self.engine.get(key)?.is_some())
    }

    /// EXISTS key [key ...]: presence per key, in request order
    ///
    /// The first read error aborts the whole lookup.
    pub fn exists_many(&self, keys: &[&[u8]]) -> StoreResult<Vec<bool>> {
        keys.iter().map(|key| self.exists(key)).collect()
    }

    /// DEL: Delete each key independently
    ///
    /// A per-key engine error is logged and swallowed; that key is not counted.
    /// Every other key counts as deleted (whether or not it existed) and emits
    /// one modification signal.
    pub fn del(&mut self, keys: &[&[u8]]) -> usize {
        let mut deleted = 0;
        for key in keys {
            if let Err(e) = self.engine.delete(key) {
                warn!(
                    "DEL {:?} failed, skipping: {}",
                    String::from_utf8_lossy(key),
                    e
                );
                continue;
            }
            deleted += 1;
            self.signal_modified("del", key);
        }
        deleted
    }
}
