//! Command dispatch for DiskStore

use crate::store::DiskStore;
use crate::traits::{KvEngine, StoreError};
use bytes::Bytes;
use resp::{Command, CommandResult};
use tracing::error;

impl<E: KvEngine> DiskStore<E> {
    /// Parse command words and execute them
    pub fn execute(&mut self, words: &[Bytes]) -> CommandResult {
        match Command::parse(words) {
            Ok(cmd) => self.apply(&cmd),
            Err(e) => CommandResult::error(e.message()),
        }
    }

    /// Execute a parsed command
    ///
    /// Store errors become error replies carrying the engine's message.
    pub fn apply(&mut self, cmd: &Command) -> CommandResult {
        match cmd {
            // ==================== Connection Commands ====================
            Command::Ping { message } => match message {
                Some(m) => CommandResult::Value(Some(m.clone())),
                None => CommandResult::Pong,
            },

            // ==================== String Commands ====================
            Command::Get { key } => match self.get(key) {
                Ok(val) => CommandResult::Value(val),
                Err(e) => reply_error(cmd, e),
            },
            Command::Set { key, value } => match self.set(key, value) {
                Ok(()) => CommandResult::Ok,
                Err(e) => reply_error(cmd, e),
            },
            Command::SetNx { key, value } => match self.setnx(key, value) {
                Ok(set) => CommandResult::flag(set),
                Err(e) => reply_error(cmd, e),
            },
            Command::Incr { key } => integer_reply(cmd, self.incr(key)),
            Command::Decr { key } => integer_reply(cmd, self.decr(key)),
            Command::IncrBy { key, delta } => integer_reply(cmd, self.incrby(key, *delta)),
            Command::DecrBy { key, delta } => integer_reply(cmd, self.decrby(key, *delta)),

            // ==================== Hash Commands ====================
            Command::HGet { key, field } => match self.hget(key, field) {
                Ok(val) => CommandResult::Value(val),
                Err(e) => reply_error(cmd, e),
            },
            Command::HSetNx { key, field, value } => match self.hsetnx(key, field, value) {
                Ok(set) => CommandResult::flag(set),
                Err(e) => reply_error(cmd, e),
            },

            // ==================== Key Commands ====================
            Command::Exists { keys } => {
                let keys_refs: Vec<&[u8]> = keys.iter().map(|k| k.as_ref()).collect();
                match self.exists_many(&keys_refs) {
                    Ok(found) => {
                        CommandResult::IntegerArray(found.into_iter().map(i64::from).collect())
                    }
                    Err(e) => reply_error(cmd, e),
                }
            }
            Command::Del { keys } => {
                let keys_refs: Vec<&[u8]> = keys.iter().map(|k| k.as_ref()).collect();
                CommandResult::Integer(self.del(&keys_refs) as i64)
            }
            Command::KeysCount { start, end } => match self.count_range(start, end) {
                Ok(count) => CommandResult::Integer(count as i64),
                Err(e) => reply_error(cmd, e),
            },
        }
    }
}

fn integer_reply(cmd: &Command, result: Result<i64, StoreError>) -> CommandResult {
    match result {
        Ok(v) => CommandResult::Integer(v),
        Err(e) => reply_error(cmd, e),
    }
}

fn reply_error(cmd: &Command, e: StoreError) -> CommandResult {
    if let StoreError::Engine(_) = e {
        error!("{} failed: {}", cmd.name(), e);
    }
    CommandResult::error(e.to_string())
}
