//! RESP (REdis Serialization Protocol) support library
//!
//! Provides the reply value model, a sync reply encoder and type-safe command
//! parsing for the disk-backed command layer. Socket framing lives with the
//! surrounding server.

pub mod command;
mod encoder;

pub use command::{Command, CommandError, CommandErrorKind, CommandResult};
pub use encoder::RespEncoder;

use bytes::Bytes;
use std::io;

/// RESP data type
#[derive(Debug, Clone, PartialEq)]
pub enum RespValue {
    /// Simple string: +OK\r\n
    SimpleString(Bytes),
    /// Error: -ERR message\r\n
    Error(Bytes),
    /// Integer: :123\r\n
    Integer(i64),
    /// Bulk string: $5\r\nhello\r\n
    BulkString(Option<Bytes>),
    /// Array: *2\r\n$3\r\nGET\r\n$3\r\nkey\r\n
    Array(Vec<RespValue>),
    /// Null: $-1\r\n
    Null,
}

/// RESP encoding error
#[derive(Debug, thiserror::Error)]
pub enum RespError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
