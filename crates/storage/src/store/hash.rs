//! Hash operations for DiskStore
//!
//! Hash fields live at `\xFF\x01{key}\x01{field}`. The existence marker
//! `\xFF\x01{key}\x01` records that `key` has been initialized as a hash.

use crate::batch::WriteBatch;
use crate::key_encoding::{existence_marker_key, hash_field_key, Namespace, EXISTENCE_MARKER_VALUE};
use crate::store::DiskStore;
use crate::traits::{KvEngine, StoreResult};
use bytes::Bytes;

impl<E: KvEngine> DiskStore<E> {
    /// HGET
    pub fn hget(&self, key: &[u8], field: &[u8]) -> StoreResult<Option<Bytes>> {
        let db_key = hash_field_key(key, field);
        Ok(self.engine.get(&db_key)?.map(Bytes::from))
    }

    /// HSETNX: Set hash field if absent
    ///
    /// The marker put and the field put are committed in one batch. When the
    /// field already holds a value (or the read fails) the batch is dropped
    /// uncommitted.
    pub fn hsetnx(&mut self, key: &[u8], field: &[u8], value: &[u8]) -> StoreResult<bool> {
        let mut batch = WriteBatch::new();
        batch.put(
            existence_marker_key(Namespace::Hash, key),
            EXISTENCE_MARKER_VALUE,
        );

        let db_key = hash_field_key(key, field);
        let current = self.engine.get(&db_key)?;
        if current.is_some_and(|v| !v.is_empty()) {
            return Ok(false);
        }

        batch.put(db_key, value);
        self.engine.write(batch)?;

        self.signal_modified("hset", key);
        Ok(true)
    }
}
