//! Disk-backed command layer
//!
//! `DiskStore` is the context every command handler runs against. It owns:
//! - the engine (any [`KvEngine`])
//! - the process modification counter
//! - the keyspace notifier that receives one signal per modified key
//!
//! ## Execution model
//!
//! Mutating operations take `&mut self`, so exactly one command runs at a time.
//! Read-then-write sequences (`setnx`, `hsetnx`, `incr_decr`) rely on that
//! exclusivity; the engine's batch commit makes already-decided writes atomic
//! but does not isolate the preceding read.
//!
//! ## Module Structure
//!
//! - `string.rs`: GET, SET, SETNX, INCR/DECR/INCRBY/DECRBY
//! - `key.rs`: EXISTS, DEL
//! - `hash.rs`: HSETNX, HGET
//! - `range.rs`: DS_KEYS_COUNT
//! - `redis.rs`: Command dispatch

mod hash;
mod key;
mod range;
mod redis;
mod string;

use crate::notify::{KeyEvent, KeyspaceNotifier, NoopNotifier};
use crate::traits::KvEngine;
use tracing::debug;

pub struct DiskStore<E: KvEngine> {
    engine: E,
    /// Successful mutations since open
    dirty: u64,
    notifier: Box<dyn KeyspaceNotifier>,
}

impl<E: KvEngine> DiskStore<E> {
    /// Create a store that discards keyspace signals
    pub fn new(engine: E) -> Self {
        Self::with_notifier(engine, Box::new(NoopNotifier))
    }

    pub fn with_notifier(engine: E, notifier: Box<dyn KeyspaceNotifier>) -> Self {
        Self {
            engine,
            dirty: 0,
            notifier,
        }
    }

    /// Modification counter
    pub fn dirty(&self) -> u64 {
        self.dirty
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Record one successful mutation of `key`
    fn signal_modified(&mut self, event: &'static str, key: &[u8]) {
        self.dirty += 1;
        debug!(
            "{} {:?} (dirty={})",
            event,
            String::from_utf8_lossy(key),
            self.dirty
        );
        self.notifier.key_modified(KeyEvent::new(event, key));
    }
}
