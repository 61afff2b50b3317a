//! dsredis - run one command against a disk-backed Redis keyspace
//!
//! The reply is written to stdout in RESP; logs go to stderr.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use bytes::Bytes;
use clap::Parser;
use resp::{RespEncoder, RespValue};
use storage::ChannelNotifier;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use dsredis::config::{Config, EngineKind, Overrides};
use dsredis::node::open_store;

#[derive(Parser, Debug)]
#[command(name = "dsredis")]
#[command(about = "dsredis - Redis commands over an ordered persistent key-value store")]
struct Args {
    /// Configuration file path (YAML format)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Data storage directory
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Storage engine
    #[arg(long, value_enum)]
    engine: Option<EngineKind>,

    /// Log level
    #[arg(long)]
    log_level: Option<String>,

    /// Command and its arguments, e.g. `SET key value`
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(config_path) => Config::from_file(config_path)
            .with_context(|| format!("loading configuration from {:?}", config_path))?,
        None => Config::default(),
    };

    // Override config with command line arguments
    config.merge(Overrides {
        engine: args.engine,
        data_dir: args.data_dir,
        log_level: args.log_level,
    });

    // Initialize logging
    let level = match config.log.level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if config.storage.engine == EngineKind::Rocksdb {
        std::fs::create_dir_all(&config.storage.data_dir).with_context(|| {
            format!("creating data directory {:?}", config.storage.data_dir)
        })?;
    }

    let (notifier, events) = ChannelNotifier::new();
    let mut store = open_store(&config.storage, Box::new(notifier))?;
    info!("Store ready ({:?})", config.storage.engine);

    let words: Vec<Bytes> = args.command.into_iter().map(Bytes::from).collect();
    let reply = RespValue::from(store.execute(&words));

    let stdout = io::stdout();
    let mut encoder = RespEncoder::new(stdout.lock());
    encoder.encode(&reply)?;

    for event in events.try_iter() {
        debug!("keyspace event: {} {:?}", event.event, event.key);
    }
    debug!("modifications: {}", store.dirty());

    drop(store);
    Ok(())
}
