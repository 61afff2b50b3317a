//! Command parsing error type

use std::fmt;

/// Command error kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandErrorKind {
    /// Empty command
    EmptyCommand,
    /// Unknown command
    UnknownCommand,
    /// Wrong number of arguments
    WrongArity,
    /// Argument failed type coercion
    InvalidArgument,
    /// Request is not an array of strings
    InvalidFormat,
}

/// Command parsing error
#[derive(Debug, Clone)]
pub struct CommandError {
    kind: CommandErrorKind,
    message: String,
}

impl CommandError {
    pub fn new(kind: CommandErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> CommandErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Redis error prefix for this kind
    pub fn error_prefix(&self) -> &'static str {
        "ERR"
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.error_prefix(), self.message)
    }
}

impl std::error::Error for CommandError {}
