//! In-memory engine
//!
//! A `BTreeMap` behind a `parking_lot::RwLock`, ordered byte-lexicographically
//! like the persistent engine. Used for ephemeral stores and tests.

use crate::batch::{BatchOp, WriteBatch};
use crate::traits::{KvCursor, KvEngine, StoreResult};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::ops::Bound;

#[derive(Debug, Default)]
pub struct MemoryEngine {
    data: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl MemoryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of physical keys
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// First physical key strictly after (or at, when `inclusive`) `from`
    fn key_from(&self, from: &[u8], inclusive: bool) -> Option<Vec<u8>> {
        let lower = if inclusive {
            Bound::Included(from)
        } else {
            Bound::Excluded(from)
        };
        self.data
            .read()
            .range::<[u8], _>((lower, Bound::Unbounded))
            .next()
            .map(|(k, _)| k.clone())
    }
}

impl KvEngine for MemoryEngine {
    fn get(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn put(&self, key: &[u8], value: &[u8]) -> StoreResult<()> {
        self.data.write().insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &[u8]) -> StoreResult<()> {
        self.data.write().remove(key);
        Ok(())
    }

    fn write(&self, batch: WriteBatch) -> StoreResult<()> {
        // Single write lock: readers observe all of the batch or none of it
        let mut data = self.data.write();
        for op in batch.into_ops() {
            match op {
                BatchOp::Put { key, value } => {
                    data.insert(key, value);
                }
                BatchOp::Delete { key } => {
                    data.remove(&key);
                }
            }
        }
        Ok(())
    }

    fn cursor(&self) -> Box<dyn KvCursor + '_> {
        Box::new(MemoryCursor {
            engine: self,
            current: None,
        })
    }
}

/// Cursor over the live map; each step re-reads under the lock
struct MemoryCursor<'a> {
    engine: &'a MemoryEngine,
    current: Option<Vec<u8>>,
}

impl KvCursor for MemoryCursor<'_> {
    fn seek(&mut self, key: &[u8]) {
        self.current = self.engine.key_from(key, true);
    }

    fn valid(&self) -> bool {
        self.current.is_some()
    }

    fn key(&self) -> Option<&[u8]> {
        self.current.as_deref()
    }

    fn next(&mut self) {
        if let Some(current) = self.current.take() {
            self.current = self.engine.key_from(&current, false);
        }
    }

    fn status(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_operations() {
        let engine = MemoryEngine::new();
        assert_eq!(engine.get(b"k").unwrap(), None);

        engine.put(b"k", b"v").unwrap();
        assert_eq!(engine.get(b"k").unwrap(), Some(b"v".to_vec()));

        engine.delete(b"k").unwrap();
        engine.delete(b"missing").unwrap();
        assert!(engine.is_empty());
    }

    #[test]
    fn test_batch_applies_in_order() {
        let engine = MemoryEngine::new();
        engine.put(b"gone", b"x").unwrap();

        let mut batch = WriteBatch::new();
        batch.put(b"a".as_slice(), b"1".as_slice());
        batch.delete(b"gone".as_slice());
        batch.put(b"a".as_slice(), b"2".as_slice());
        engine.write(batch).unwrap();

        assert_eq!(engine.get(b"a").unwrap(), Some(b"2".to_vec()));
        assert_eq!(engine.get(b"gone").unwrap(), None);
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn test_cursor_seeks_and_walks_in_byte_order() {
        let engine = MemoryEngine::new();
        for key in [b"b".as_slice(), b"a\x00", b"\xFF\x01", b"c", b"a"] {
            engine.put(key, b"1").unwrap();
        }

        let mut cursor = engine.cursor();
        cursor.seek(b"a\x00");
        let mut seen = Vec::new();
        while cursor.valid() {
            seen.push(cursor.key().unwrap().to_vec());
            cursor.next();
        }
        cursor.status().unwrap();

        assert_eq!(
            seen,
            vec![
                b"a\x00".to_vec(),
                b"b".to_vec(),
                b"c".to_vec(),
                b"\xFF\x01".to_vec()
            ]
        );
    }

    #[test]
    fn test_cursor_past_end_is_invalid() {
        let engine = MemoryEngine::new();
        engine.put(b"a", b"1").unwrap();

        let mut cursor = engine.cursor();
        cursor.seek(b"b");
        assert!(!cursor.valid());
        assert_eq!(cursor.key(), None);
    }
}
