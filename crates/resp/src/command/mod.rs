//! Redis command parsing module
//!
//! Parses RespValue (or a raw argument list) into type-safe Command structures.
//! Argument coercion happens here, so a malformed integer never reaches the store.

mod error;
mod result;

pub use error::{CommandError, CommandErrorKind};
pub use result::CommandResult;

use crate::RespValue;
use bytes::Bytes;

/// Redis command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // ==================== Connection Commands ====================
    /// PING [message]
    Ping { message: Option<Bytes> },

    // ==================== String Commands ====================
    /// GET key
    Get { key: Bytes },
    /// SET key value
    Set { key: Bytes, value: Bytes },
    /// SETNX key value
    SetNx { key: Bytes, value: Bytes },
    /// INCR key
    Incr { key: Bytes },
    /// INCRBY key increment
    IncrBy { key: Bytes, delta: i64 },
    /// DECR key
    Decr { key: Bytes },
    /// DECRBY key decrement
    DecrBy { key: Bytes, delta: i64 },

    // ==================== Hash Commands ====================
    /// HGET key field
    HGet { key: Bytes, field: Bytes },
    /// HSETNX key field value
    HSetNx {
        key: Bytes,
        field: Bytes,
        value: Bytes,
    },

    // ==================== Key Commands ====================
    /// EXISTS key [key ...]
    Exists { keys: Vec<Bytes> },
    /// DEL key [key ...]
    Del { keys: Vec<Bytes> },
    /// DS_KEYS_COUNT start end
    KeysCount { start: Bytes, end: Bytes },
}

impl Command {
    /// Parse a command from its words, command name first
    pub fn parse(words: &[Bytes]) -> Result<Self, CommandError> {
        let Some((name, args)) = words.split_first() else {
            return Err(CommandError::new(
                CommandErrorKind::EmptyCommand,
                "Empty command",
            ));
        };
        let cmd_name = String::from_utf8_lossy(name).to_uppercase();
        parse_command(&cmd_name, args)
    }

    /// Get command name
    pub fn name(&self) -> &'static str {
        match self {
            Command::Ping { .. } => "PING",
            Command::Get { .. } => "GET",
            Command::Set { .. } => "SET",
            Command::SetNx { .. } => "SETNX",
            Command::Incr { .. } => "INCR",
            Command::IncrBy { .. } => "INCRBY",
            Command::Decr { .. } => "DECR",
            Command::DecrBy { .. } => "DECRBY",
            Command::HGet { .. } => "HGET",
            Command::HSetNx { .. } => "HSETNX",
            Command::Exists { .. } => "EXISTS",
            Command::Del { .. } => "DEL",
            Command::KeysCount { .. } => "DS_KEYS_COUNT",
        }
    }
}

impl TryFrom<RespValue> for Command {
    type Error = CommandError;

    fn try_from(value: RespValue) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

impl TryFrom<&RespValue> for Command {
    type Error = CommandError;

    fn try_from(value: &RespValue) -> Result<Self, Self::Error> {
        let args = extract_args(value)?;
        Command::parse(&args)
    }
}

/// Extract argument list from RespValue
fn extract_args(value: &RespValue) -> Result<Vec<Bytes>, CommandError> {
    match value {
        RespValue::Array(items) => {
            let mut args = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    RespValue::BulkString(Some(bytes)) => args.push(bytes.clone()),
                    RespValue::SimpleString(s) => args.push(s.clone()),
                    RespValue::Integer(n) => args.push(Bytes::from(n.to_string())),
                    _ => {
                        return Err(CommandError::new(
                            CommandErrorKind::InvalidArgument,
                            "Invalid argument type",
                        ))
                    }
                }
            }
            Ok(args)
        }
        _ => Err(CommandError::new(
            CommandErrorKind::InvalidFormat,
            "Command must be an array",
        )),
    }
}

/// Parse integer argument
fn parse_int(arg: &[u8]) -> Result<i64, CommandError> {
    std::str::from_utf8(arg)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| {
            CommandError::new(
                CommandErrorKind::InvalidArgument,
                "value is not an integer or out of range",
            )
        })
}

/// Check argument count
fn check_arity(
    args: &[Bytes],
    min: usize,
    max: Option<usize>,
    cmd: &str,
) -> Result<(), CommandError> {
    let too_many = max.is_some_and(|max| args.len() > max);
    if args.len() < min || too_many {
        return Err(CommandError::new(
            CommandErrorKind::WrongArity,
            format!("wrong number of arguments for '{}' command", cmd),
        ));
    }
    Ok(())
}

/// Parse command
fn parse_command(cmd: &str, args: &[Bytes]) -> Result<Command, CommandError> {
    match cmd {
        "PING" => {
            check_arity(args, 0, Some(1), cmd)?;
            Ok(Command::Ping {
                message: args.first().cloned(),
            })
        }

        // String commands
        "GET" => {
            check_arity(args, 1, Some(1), cmd)?;
            Ok(Command::Get {
                key: args[0].clone(),
            })
        }
        "SET" => {
            check_arity(args, 2, Some(2), cmd)?;
            Ok(Command::Set {
                key: args[0].clone(),
                value: args[1].clone(),
            })
        }
        "SETNX" => {
            check_arity(args, 2, Some(2), cmd)?;
            Ok(Command::SetNx {
                key: args[0].clone(),
                value: args[1].clone(),
            })
        }
        "INCR" => {
            check_arity(args, 1, Some(1), cmd)?;
            Ok(Command::Incr {
                key: args[0].clone(),
            })
        }
        "INCRBY" | "DS_INCRBY" => {
            check_arity(args, 2, Some(2), cmd)?;
            Ok(Command::IncrBy {
                key: args[0].clone(),
                delta: parse_int(&args[1])?,
            })
        }
        "DECR" => {
            check_arity(args, 1, Some(1), cmd)?;
            Ok(Command::Decr {
                key: args[0].clone(),
            })
        }
        "DECRBY" => {
            check_arity(args, 2, Some(2), cmd)?;
            Ok(Command::DecrBy {
                key: args[0].clone(),
                delta: parse_int(&args[1])?,
            })
        }

        // Hash commands
        "HGET" => {
            check_arity(args, 2, Some(2), cmd)?;
            Ok(Command::HGet {
                key: args[0].clone(),
                field: args[1].clone(),
            })
        }
        "HSETNX" | "DS_HSETNX" => {
            check_arity(args, 3, Some(3), cmd)?;
            Ok(Command::HSetNx {
                key: args[0].clone(),
                field: args[1].clone(),
                value: args[2].clone(),
            })
        }

        // Key commands
        "EXISTS" | "DS_EXISTS" => {
            check_arity(args, 1, None, cmd)?;
            Ok(Command::Exists {
                keys: args.to_vec(),
            })
        }
        "DEL" => {
            check_arity(args, 1, None, cmd)?;
            Ok(Command::Del {
                keys: args.to_vec(),
            })
        }
        "DS_KEYS_COUNT" => {
            check_arity(args, 2, Some(2), cmd)?;
            Ok(Command::KeysCount {
                start: args[0].clone(),
                end: args[1].clone(),
            })
        }

        _ => Err(CommandError::new(
            CommandErrorKind::UnknownCommand,
            format!("unknown command '{}'", cmd),
        )),
    }
}
