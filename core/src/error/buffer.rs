//! An error value that tunnels a data payload out of functions that can only
//! return an error.

use serde::Serialize;
use std::io::{self, Read, Write};
use thiserror::Error;

/// Error carrying an arbitrary byte payload alongside its message.
///
/// `Display` prints only the message. The payload behaves like a byte buffer:
/// writes append, reads drain from the front, and `as_bytes()` exposes the
/// unread portion.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{msg}")]
pub struct BufferError {
    msg: String,
    data: Vec<u8>,
    pos: usize,
}

impl BufferError {
    pub fn new(msg: impl Into<String>, data: &[u8]) -> Self {
        Self {
            msg: msg.into(),
            data: data.to_vec(),
            pos: 0,
        }
    }

    pub fn from_string(msg: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            data: data.into().into_bytes(),
            pos: 0,
        }
    }

    /// Serialise `data` as the payload. If serialisation fails the returned
    /// error carries the serde message and no payload.
    pub fn from_json<T: Serialize + ?Sized>(msg: impl Into<String>, data: &T) -> Self {
        match serde_json::to_vec(data) {
            Ok(buf) => Self {
                msg: msg.into(),
                data: buf,
                pos: 0,
            },
            Err(e) => Self::new(e.to_string(), &[]),
        }
    }

    pub fn message(&self) -> &str {
        &self.msg
    }

    pub fn len(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data[self.pos..]
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }
}

impl Write for BufferError {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for BufferError {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut unread = &self.data[self.pos..];
        let n = unread.read(buf)?;
        self.pos += n;
        if self.pos == self.data.len() {
            self.data.clear();
            self.pos = 0;
        }
        Ok(n)
    }
}
