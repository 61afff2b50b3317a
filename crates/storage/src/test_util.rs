//! Fault-injecting engine for error-path tests

use crate::batch::WriteBatch;
use crate::memory::MemoryEngine;
use crate::traits::{KvCursor, KvEngine, StoreError, StoreResult};
use parking_lot::Mutex;
use std::collections::HashSet;

pub const INJECTED: &str = "IO error: injected fault";

/// Wraps a [`MemoryEngine`] and fails selected operations
#[derive(Default)]
pub struct FaultyEngine {
    inner: MemoryEngine,
    failing_reads: Mutex<HashSet<Vec<u8>>>,
    failing_deletes: Mutex<HashSet<Vec<u8>>>,
    fail_writes: Mutex<bool>,
    fail_iteration: Mutex<bool>,
}

impl FaultyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inner(&self) -> &MemoryEngine {
        &self.inner
    }

    pub fn fail_read(&self, key: &[u8]) {
        self.failing_reads.lock().insert(key.to_vec());
    }

    pub fn fail_delete(&self, key: &[u8]) {
        self.failing_deletes.lock().insert(key.to_vec());
    }

    /// Fail every put and batch commit
    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.lock() = fail;
    }

    /// Report an error from cursor status
    pub fn fail_iteration(&self, fail: bool) {
        *self.fail_iteration.lock() = fail;
    }

    fn injected() -> StoreError {
        StoreError::Engine(INJECTED.to_string())
    }
}

impl KvEngine for FaultyEngine {
    fn get(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        if self.failing_reads.lock().contains(key) {
            return Err(Self::injected());
        }
        self.inner.get(key)
    }

    fn put(&self, key: &[u8], value: &[u8]) -> StoreResult<()> {
        if *self.fail_writes.lock() {
            return Err(Self::injected());
        }
        self.inner.put(key, value)
    }

    fn delete(&self, key: &[u8]) -> StoreResult<()> {
        if self.failing_deletes.lock().contains(key) {
            return Err(Self::injected());
        }
        self.inner.delete(key)
    }

    fn write(&self, batch: WriteBatch) -> StoreResult<()> {
        if *self.fail_writes.lock() {
            return Err(Self::injected());
        }
        self.inner.write(batch)
    }

    fn cursor(&self) -> Box<dyn KvCursor + '_> {
        Box::new(FaultyCursor {
            inner: self.inner.cursor(),
            fail: *self.fail_iteration.lock(),
        })
    }
}

struct FaultyCursor<'a> {
    inner: Box<dyn KvCursor + 'a>,
    fail: bool,
}

impl KvCursor for FaultyCursor<'_> {
    fn seek(&mut self, key: &[u8]) {
        self.inner.seek(key);
    }

    fn valid(&self) -> bool {
        self.inner.valid()
    }

    fn key(&self) -> Option<&[u8]> {
        self.inner.key()
    }

    fn next(&mut self) {
        self.inner.next();
    }

    fn status(&self) -> StoreResult<()> {
        if self.fail {
            return Err(FaultyEngine::injected());
        }
        self.inner.status()
    }
}
