//! Command execution result type

use crate::RespValue;
use bytes::Bytes;

/// Command execution result
///
/// Every reply a command handler can produce: bulk value (absent renders as
/// null), integer, status or error. Converts directly into a [`RespValue`].
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// OK response
    Ok,
    /// PONG response
    Pong,
    /// Integer response
    Integer(i64),
    /// Single value (None renders as a null bulk)
    Value(Option<Bytes>),
    /// One integer per requested key (EXISTS)
    IntegerArray(Vec<i64>),
    /// Error response, message without the `ERR` prefix
    Error(String),
}

impl CommandResult {
    /// Integer reply for a set-if-absent style outcome
    pub fn flag(set: bool) -> Self {
        CommandResult::Integer(i64::from(set))
    }

    pub fn error(msg: impl Into<String>) -> Self {
        CommandResult::Error(msg.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CommandResult::Error(_))
    }
}

impl From<CommandResult> for RespValue {
    fn from(result: CommandResult) -> Self {
        match result {
            CommandResult::Ok => RespValue::SimpleString(Bytes::from("OK")),
            CommandResult::Pong => RespValue::SimpleString(Bytes::from("PONG")),
            CommandResult::Integer(n) => RespValue::Integer(n),
            CommandResult::Value(v) => match v {
                Some(bytes) => RespValue::BulkString(Some(bytes)),
                None => RespValue::Null,
            },
            CommandResult::IntegerArray(items) => {
                RespValue::Array(items.into_iter().map(RespValue::Integer).collect())
            }
            CommandResult::Error(msg) => RespValue::Error(Bytes::from(format!("ERR {}", msg))),
        }
    }
}
