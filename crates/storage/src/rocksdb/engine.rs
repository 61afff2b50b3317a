//! RocksDB engine
//!
//! Owns the DB handle together with the block cache and the read/write options
//! it was opened with. Fields drop in declaration order, so the DB handle is
//! released before the cache it references.

use crate::batch::{BatchOp, WriteBatch as StoreBatch};
use crate::rocksdb::options::{EngineOptions, BLOOM_BITS_PER_KEY};
use crate::traits::{KvCursor, KvEngine, StoreError, StoreResult};
use rocksdb::{
    BlockBasedOptions, Cache, DBCompressionType, DBRawIterator, Options, ReadOptions, WriteBatch,
    WriteOptions, DB,
};
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub struct RocksEngine {
    /// RocksDB instance
    db: DB,
    /// Options for point reads
    read_opts: ReadOptions,
    /// Write options
    write_opts: WriteOptions,
    /// Block cache shared by all table readers
    _cache: Cache,
    /// Database path
    path: PathBuf,
}

impl RocksEngine {
    /// Open (or create) the engine at `path`
    ///
    /// Open failures are returned to the caller; deciding whether the process
    /// should exit belongs to the startup sequence.
    pub fn open<P: AsRef<Path>>(path: P, options: &EngineOptions) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        let cache = Cache::new_lru_cache(options.cache_size_bytes());

        let mut table_opts = BlockBasedOptions::default();
        table_opts.set_block_cache(&cache);
        table_opts.set_bloom_filter(BLOOM_BITS_PER_KEY, false);
        table_opts.set_block_size(options.block_size_bytes());
        table_opts.set_block_restart_interval(options.block_restart_interval);

        let mut opts = Options::default();
        opts.set_block_based_table_factory(&table_opts);
        opts.create_if_missing(options.create_if_missing);
        opts.set_error_if_exists(options.error_if_exists);
        opts.set_paranoid_checks(options.paranoid_checks);
        opts.set_write_buffer_size(options.write_buffer_size_bytes());
        opts.set_max_open_files(options.max_open_files);
        opts.set_compression_type(DBCompressionType::Snappy);

        let db = DB::open(&opts, &path).map_err(|e| {
            error!("Failed to open RocksDB at {:?}: {}", path, e);
            StoreError::Open(e.into_string())
        })?;

        let mut write_opts = WriteOptions::default();
        write_opts.set_sync(false);

        info!(
            "Opened RocksDB at {:?} (cache {} MB, write buffer {} MB, block {} KB)",
            path, options.cache_size_mb, options.write_buffer_size_mb, options.block_size_kb
        );

        Ok(Self {
            db,
            read_opts: Self::new_read_opts(),
            write_opts,
            _cache: cache,
            path,
        })
    }

    /// Flush memtables to disk
    pub fn flush(&self) -> StoreResult<()> {
        self.db.flush().map_err(engine_error)
    }

    /// Read options: no checksum verification, fill the block cache
    fn new_read_opts() -> ReadOptions {
        let mut read_opts = ReadOptions::default();
        read_opts.set_verify_checksums(false);
        read_opts.fill_cache(true);
        read_opts
    }
}

impl Drop for RocksEngine {
    fn drop(&mut self) {
        info!("Closing RocksDB at {:?}", self.path);
    }
}

fn engine_error(e: rocksdb::Error) -> StoreError {
    StoreError::Engine(e.into_string())
}

impl KvEngine for RocksEngine {
    fn get(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        self.db.get_opt(key, &self.read_opts).map_err(engine_error)
    }

    fn put(&self, key: &[u8], value: &[u8]) -> StoreResult<()> {
        self.db
            .put_opt(key, value, &self.write_opts)
            .map_err(engine_error)
    }

    fn delete(&self, key: &[u8]) -> StoreResult<()> {
        self.db
            .delete_opt(key, &self.write_opts)
            .map_err(engine_error)
    }

    fn write(&self, batch: StoreBatch) -> StoreResult<()> {
        let mut wb = WriteBatch::default();
        for op in batch.into_ops() {
            match op {
                BatchOp::Put { key, value } => wb.put(key, value),
                BatchOp::Delete { key } => wb.delete(key),
            }
        }
        self.db
            .write_opt(wb, &self.write_opts)
            .map_err(engine_error)
    }

    fn cursor(&self) -> Box<dyn KvCursor + '_> {
        Box::new(RocksCursor {
            iter: self.db.raw_iterator_opt(Self::new_read_opts()),
        })
    }
}

/// Cursor over a raw RocksDB iterator
struct RocksCursor<'a> {
    iter: DBRawIterator<'a>,
}

impl KvCursor for RocksCursor<'_> {
    fn seek(&mut self, key: &[u8]) {
        self.iter.seek(key);
    }

    fn valid(&self) -> bool {
        self.iter.valid()
    }

    fn key(&self) -> Option<&[u8]> {
        self.iter.key()
    }

    fn next(&mut self) {
        self.iter.next();
    }

    fn status(&self) -> StoreResult<()> {
        self.iter.status().map_err(engine_error)
    }
}
