//! RESP protocol sync encoder

use crate::{RespError, RespValue};
use std::io::Write;

/// RESP protocol sync encoder
pub struct RespEncoder<W: Write> {
    writer: W,
}

impl<W: Write> RespEncoder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Encode RESP value, write it and flush
    pub fn encode(&mut self, value: &RespValue) -> Result<(), RespError> {
        self.write_value(value)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_value(&mut self, value: &RespValue) -> Result<(), RespError> {
        match value {
            RespValue::SimpleString(s) => {
                write!(self.writer, "+{}\r\n", String::from_utf8_lossy(s))?;
            }
            RespValue::Error(e) => {
                write!(self.writer, "-{}\r\n", String::from_utf8_lossy(e))?;
            }
            RespValue::Integer(i) => {
                write!(self.writer, ":{}\r\n", i)?;
            }
            RespValue::BulkString(Some(bytes)) => {
                write!(self.writer, "${}\r\n", bytes.len())?;
                self.writer.write_all(bytes)?;
                self.writer.write_all(b"\r\n")?;
            }
            RespValue::BulkString(None) | RespValue::Null => {
                self.writer.write_all(b"$-1\r\n")?;
            }
            RespValue::Array(items) => {
                write!(self.writer, "*{}\r\n", items.len())?;
                for item in items {
                    self.write_value(item)?;
                }
            }
        }
        Ok(())
    }
}
