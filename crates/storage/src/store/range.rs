//! Range counting over the scalar key space

use crate::key_encoding::is_namespaced;
use crate::store::DiskStore;
use crate::traits::{KvEngine, StoreResult};

impl<E: KvEngine> DiskStore<E> {
    /// DS_KEYS_COUNT: number of scalar keys in `[start, end]`
    ///
    /// Bounds compare as full-length byte strings (embedded zero bytes included).
    /// The scan stops at the first namespaced key, since every key from there
    /// on is an internal composite-type encoding.
    pub fn count_range(&self, start: &[u8], end: &[u8]) -> StoreResult<u64> {
        if start > end {
            return Ok(0);
        }

        let mut count = 0;
        let mut cursor = self.engine.cursor();
        cursor.seek(start);
        while let Some(key) = cursor.key() {
            if is_namespaced(key) || key > end {
                break;
            }
            count += 1;
            cursor.next();
        }
        cursor.status()?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::memory::MemoryEngine;
    use crate::store::DiskStore;
    use crate::test_util::{FaultyEngine, INJECTED};
    use crate::traits::StoreError;

    fn store_with(keys: &[&[u8]]) -> DiskStore<MemoryEngine> {
        let mut store = DiskStore::new(MemoryEngine::new());
        for key in keys {
            store.set(key, b"1").unwrap();
        }
        store
    }

    #[test]
    fn test_count_inclusive_bounds() {
        let store = store_with(&[b"a", b"b", b"c"]);
        assert_eq!(store.count_range(b"a", b"z").unwrap(), 3);
        assert_eq!(store.count_range(b"a", b"c").unwrap(), 3);
        assert_eq!(store.count_range(b"b", b"b").unwrap(), 1);
        assert_eq!(store.count_range(b"a\x00", b"b").unwrap(), 1);
    }

    #[test]
    fn test_inverted_bounds_count_zero() {
        let store = store_with(&[b"a", b"b", b"c"]);
        assert_eq!(store.count_range(b"z", b"a").unwrap(), 0);
    }

    #[test]
    fn test_bounds_compare_past_zero_bytes() {
        let store = store_with(&[b"k\x00a", b"k\x00b", b"k\x00c"]);
        // A C-string comparison would see "k" == "k" and count everything
        assert_eq!(store.count_range(b"k\x00b", b"k\x00b").unwrap(), 1);
        assert_eq!(store.count_range(b"k\x00c", b"k\x00a").unwrap(), 0);
    }

    #[test]
    fn test_namespaced_keys_are_never_counted() {
        let mut store = store_with(&[b"a", b"b"]);
        store.hsetnx(b"h", b"f", b"9").unwrap();

        assert_eq!(store.count_range(b"a", b"z").unwrap(), 2);
        assert_eq!(store.count_range(b"a", b"\xFF\xFF\xFF").unwrap(), 2);
        assert_eq!(store.count_range(b"\xFF", b"\xFF\xFF\xFF").unwrap(), 0);
    }

    #[test]
    fn test_empty_store() {
        let store = store_with(&[]);
        assert_eq!(store.count_range(b"", b"\xFE").unwrap(), 0);
    }

    #[test]
    fn test_iteration_error_surfaces() {
        let engine = FaultyEngine::new();
        engine.fail_iteration(true);
        let store = DiskStore::new(engine);
        assert_eq!(
            store.count_range(b"a", b"z").unwrap_err(),
            StoreError::Engine(INJECTED.to_string())
        );
    }
}
