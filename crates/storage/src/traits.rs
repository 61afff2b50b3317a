//! Storage trait definitions
//!
//! The command layer talks to the ordered key-value engine only through these
//! traits:
//!
//! - `KvEngine`: point get/put/delete, atomic batch commit, cursor creation
//! - `KvCursor`: forward iteration from a seek position
//!
//! Keys are opaque byte strings ordered byte-lexicographically.

use crate::batch::WriteBatch;

// ============================================================================
// Error Types
// ============================================================================

/// Storage error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Engine reported corruption, disk failure or an internal fault.
    /// The message is the engine's own, surfaced verbatim.
    #[error("{0}")]
    Engine(String),
    /// A stored value or argument failed coercion
    #[error("{0}")]
    InvalidArgument(String),
    /// The engine could not be opened
    #[error("failed to open store: {0}")]
    Open(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

// ============================================================================
// Engine Traits
// ============================================================================

/// Ordered, persistent byte-key to byte-value store
pub trait KvEngine: Send + Sync {
    /// Point lookup. `Ok(None)` means absent, never an error.
    fn get(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>>;

    /// Unconditional point write
    fn put(&self, key: &[u8], value: &[u8]) -> StoreResult<()>;

    /// Point delete. Deleting an absent key is not an error.
    fn delete(&self, key: &[u8]) -> StoreResult<()>;

    /// Apply every operation in `batch` atomically: all become visible or none do
    fn write(&self, batch: WriteBatch) -> StoreResult<()>;

    /// Create a forward cursor. Dropping it releases the underlying iterator.
    fn cursor(&self) -> Box<dyn KvCursor + '_>;
}

/// Forward iterator over physical keys in ascending byte order
pub trait KvCursor {
    /// Position at the first key >= `key`
    fn seek(&mut self, key: &[u8]);

    /// Whether the cursor is positioned on an entry
    fn valid(&self) -> bool;

    /// Key at the current position, None when not valid
    fn key(&self) -> Option<&[u8]>;

    /// Advance to the next key
    fn next(&mut self);

    /// Error accumulated during iteration, if any
    fn status(&self) -> StoreResult<()>;
}

impl<T: KvEngine + ?Sized> KvEngine for Box<T> {
    fn get(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn put(&self, key: &[u8], value: &[u8]) -> StoreResult<()> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &[u8]) -> StoreResult<()> {
        (**self).delete(key)
    }

    fn write(&self, batch: WriteBatch) -> StoreResult<()> {
        (**self).write(batch)
    }

    fn cursor(&self) -> Box<dyn KvCursor + '_> {
        (**self).cursor()
    }
}
