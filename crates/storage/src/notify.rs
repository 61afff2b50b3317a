//! Keyspace modification signals
//!
//! Every successful mutation emits one [`KeyEvent`] per modified logical key.
//! Replication and keyspace-notification subsystems consume them through a
//! [`KeyspaceNotifier`].

use bytes::Bytes;
use crossbeam_channel::{Receiver, Sender};
use tracing::trace;

/// A modified key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Event name (`set`, `incrby`, `del`, `hset`)
    pub event: &'static str,
    /// Logical (user-visible) key
    pub key: Bytes,
}

impl KeyEvent {
    pub fn new(event: &'static str, key: &[u8]) -> Self {
        Self {
            event,
            key: Bytes::copy_from_slice(key),
        }
    }
}

/// Sink for key modification signals
pub trait KeyspaceNotifier: Send {
    fn key_modified(&self, event: KeyEvent);
}

/// Discards every signal
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl KeyspaceNotifier for NoopNotifier {
    fn key_modified(&self, _event: KeyEvent) {}
}

/// Forwards signals into an unbounded channel
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: Sender<KeyEvent>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiving end consumers read from
    pub fn new() -> (Self, Receiver<KeyEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { tx }, rx)
    }
}

impl KeyspaceNotifier for ChannelNotifier {
    fn key_modified(&self, event: KeyEvent) {
        if let Err(e) = self.tx.send(event) {
            // No consumer left; the mutation itself already succeeded
            trace!("keyspace event dropped: {:?}", e.into_inner());
        }
    }
}
