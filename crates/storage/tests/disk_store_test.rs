//! End-to-end command behaviour against a real RocksDB engine

use bytes::Bytes;
use resp::CommandResult;
use storage::{ChannelNotifier, DiskStore, EngineOptions, KeyEvent, RocksEngine};
use tempfile::TempDir;

fn open_store() -> (TempDir, DiskStore<RocksEngine>) {
    let dir = TempDir::new().unwrap();
    let engine = RocksEngine::open(dir.path(), &EngineOptions::default()).unwrap();
    (dir, DiskStore::new(engine))
}

fn words(args: &[&str]) -> Vec<Bytes> {
    args.iter().map(|s| Bytes::from(s.to_string())).collect()
}

#[test]
fn test_never_written_key_is_absent() {
    let (_dir, store) = open_store();
    assert_eq!(store.get(b"ghost").unwrap(), None);
    assert!(!store.exists(b"ghost").unwrap());
}

#[test]
fn test_set_get_roundtrip() {
    let (_dir, mut store) = open_store();
    let value = b"\x00\x01\xFE payload".to_vec();
    store.set(b"key", &value).unwrap();
    assert_eq!(store.get(b"key").unwrap(), Some(Bytes::from(value)));
}

#[test]
fn test_setnx_twice() {
    let (_dir, mut store) = open_store();
    assert!(store.setnx(b"k", b"v1").unwrap());
    assert!(!store.setnx(b"k", b"v2").unwrap());
    assert_eq!(store.get(b"k").unwrap(), Some(Bytes::from("v1")));
}

#[test]
fn test_incrby_and_incr_decr() {
    let (_dir, mut store) = open_store();
    assert_eq!(store.incrby(b"fresh", -17).unwrap(), -17);

    store.set(b"n", b"100").unwrap();
    store.incr(b"n").unwrap();
    store.decr(b"n").unwrap();
    assert_eq!(store.get(b"n").unwrap(), Some(Bytes::from("100")));
}

#[test]
fn test_hsetnx_same_and_distinct_members() {
    let (_dir, mut store) = open_store();
    assert!(store.hsetnx(b"h", b"m", b"v1").unwrap());
    assert!(!store.hsetnx(b"h", b"m", b"v2").unwrap());
    assert_eq!(store.hget(b"h", b"m").unwrap(), Some(Bytes::from("v1")));

    assert!(store.hsetnx(b"h", b"m2", b"v").unwrap());
    assert_eq!(store.hget(b"h", b"m2").unwrap(), Some(Bytes::from("v")));
}

#[test]
fn test_count_range_bounds() {
    let (_dir, mut store) = open_store();
    for key in [b"a".as_slice(), b"b", b"c"] {
        store.set(key, b"x").unwrap();
    }
    assert_eq!(store.count_range(b"a", b"z").unwrap(), 3);
    assert_eq!(store.count_range(b"z", b"a").unwrap(), 0);
}

#[test]
fn test_count_range_stops_at_namespace_boundary() {
    let (_dir, mut store) = open_store();
    store.set(b"a", b"1").unwrap();
    store.set(b"b", b"2").unwrap();
    store.hsetnx(b"h", b"f", b"9").unwrap();

    assert_eq!(store.count_range(b"a", b"z").unwrap(), 2);
    // The end bound alone would admit the encoded hash keys
    assert_eq!(store.count_range(b"a", b"\xFF\xFF").unwrap(), 2);
}

#[test]
fn test_del_counts_removed_keys() {
    let (_dir, mut store) = open_store();
    store.set(b"k1", b"1").unwrap();
    store.set(b"k3", b"3").unwrap();

    assert_eq!(store.del(&[b"k1", b"k3"]), 2);
    assert_eq!(store.get(b"k1").unwrap(), None);
    assert_eq!(store.get(b"k3").unwrap(), None);
}

#[test]
fn test_modification_signals() {
    let dir = TempDir::new().unwrap();
    let engine = RocksEngine::open(dir.path(), &EngineOptions::default()).unwrap();
    let (notifier, rx) = ChannelNotifier::new();
    let mut store = DiskStore::with_notifier(engine, Box::new(notifier));

    store.set(b"a", b"1").unwrap();
    store.setnx(b"a", b"2").unwrap();
    store.incr(b"c").unwrap();
    store.hsetnx(b"h", b"f", b"v").unwrap();
    store.del(&[b"a"]);
    store.get(b"a").unwrap();

    assert_eq!(store.dirty(), 4);
    let events: Vec<KeyEvent> = rx.try_iter().collect();
    assert_eq!(
        events,
        vec![
            KeyEvent::new("set", b"a"),
            KeyEvent::new("incrby", b"c"),
            KeyEvent::new("hset", b"h"),
            KeyEvent::new("del", b"a"),
        ]
    );
}

#[test]
fn test_scenario_through_dispatcher() {
    let (_dir, mut store) = open_store();
    assert_eq!(store.execute(&words(&["SET", "a", "1"])), CommandResult::Ok);
    assert_eq!(store.execute(&words(&["SET", "b", "2"])), CommandResult::Ok);
    assert_eq!(
        store.execute(&words(&["HSETNX", "h", "f", "9"])),
        CommandResult::Integer(1)
    );
    assert_eq!(
        store.execute(&words(&["DS_KEYS_COUNT", "a", "z"])),
        CommandResult::Integer(2)
    );
}

#[test]
fn test_data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let engine = RocksEngine::open(dir.path(), &EngineOptions::default()).unwrap();
        let mut store = DiskStore::new(engine);
        store.set(b"durable", b"yes").unwrap();
        store.hsetnx(b"h", b"f", b"1").unwrap();
    }

    let engine = RocksEngine::open(dir.path(), &EngineOptions::default()).unwrap();
    let mut store = DiskStore::new(engine);
    assert_eq!(store.get(b"durable").unwrap(), Some(Bytes::from("yes")));
    assert!(!store.hsetnx(b"h", b"f", b"2").unwrap());
    assert_eq!(store.dirty(), 0);
}
