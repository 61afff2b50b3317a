//! String operations for DiskStore
//!
//! Scalar keys are stored verbatim, without any namespace prefix.

use crate::batch::WriteBatch;
use crate::store::DiskStore;
use crate::traits::{KvEngine, StoreError, StoreResult};
use bytes::Bytes;

const NOT_AN_INTEGER: &str = "value is not an integer or out of range";
const OVERFLOW: &str = "increment or decrement would overflow";

impl<E: KvEngine> DiskStore<E> {
    /// GET: `None` when absent; engine read errors are returned as-is
    pub fn get(&self, key: &[u8]) -> StoreResult<Option<Bytes>> {
        Ok(self.engine.get(key)?.map(Bytes::from))
    }

    /// SET: Unconditional write
    pub fn set(&mut self, key: &[u8], value: &[u8]) -> StoreResult<()> {
        self.engine.put(key, value)?;
        self.signal_modified("set", key);
        Ok(())
    }

    /// SETNX: Set if not exists
    ///
    /// A stored empty value counts as absent. The write goes through a
    /// single-operation batch.
    pub fn setnx(&mut self, key: &[u8], value: &[u8]) -> StoreResult<bool> {
        let current = self.engine.get(key)?;
        if current.is_some_and(|v| !v.is_empty()) {
            return Ok(false);
        }

        let mut batch = WriteBatch::new();
        batch.put(key, value);
        self.engine.write(batch)?;

        self.signal_modified("set", key);
        Ok(true)
    }

    /// INCR
    pub fn incr(&mut self, key: &[u8]) -> StoreResult<i64> {
        self.incr_decr(key, 1)
    }

    /// DECR
    pub fn decr(&mut self, key: &[u8]) -> StoreResult<i64> {
        self.incr_decr(key, -1)
    }

    /// INCRBY
    pub fn incrby(&mut self, key: &[u8], delta: i64) -> StoreResult<i64> {
        self.incr_decr(key, delta)
    }

    /// DECRBY
    pub fn decrby(&mut self, key: &[u8], delta: i64) -> StoreResult<i64> {
        let delta = delta
            .checked_neg()
            .ok_or_else(|| StoreError::InvalidArgument(OVERFLOW.to_string()))?;
        self.incr_decr(key, delta)
    }

    /// Add `delta` to the integer stored at `key`, absent counting as 0
    ///
    /// Returns the new value, written back as decimal text.
    pub fn incr_decr(&mut self, key: &[u8], delta: i64) -> StoreResult<i64> {
        let current = match self.engine.get(key)? {
            Some(value) if !value.is_empty() => parse_stored_integer(&value)?,
            _ => 0,
        };

        let new_value = current
            .checked_add(delta)
            .ok_or_else(|| StoreError::InvalidArgument(OVERFLOW.to_string()))?;

        self.engine.put(key, new_value.to_string().as_bytes())?;
        self.signal_modified("incrby", key);
        Ok(new_value)
    }
}

/// Parse a stored value as a base-10 signed 64-bit integer
fn parse_stored_integer(value: &[u8]) -> StoreResult<i64> {
    std::str::from_utf8(value)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| StoreError::InvalidArgument(NOT_AN_INTEGER.to_string()))
}
