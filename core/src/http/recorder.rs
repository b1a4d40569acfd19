use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::io::{self, Write};

use crate::error::HttpError;

/// In-memory response sink for driving a handler directly in tests or
/// in-process calls.
#[derive(Debug, Clone)]
pub struct ResponseRecorder {
    headers: HeaderMap,
    body: Vec<u8>,
    status: StatusCode,
}

impl Default for ResponseRecorder {
    fn default() -> Self {
        Self {
            headers: HeaderMap::new(),
            body: Vec::new(),
            status: StatusCode::OK,
        }
    }
}

impl ResponseRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn header_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub fn write_header(&mut self, status: StatusCode) {
        self.status = status;
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Plain-text error reply: sets the status and writes `msg` plus a newline.
    pub fn error(&mut self, msg: &str, status: StatusCode) {
        self.headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        self.headers.insert(
            "x-content-type-options",
            HeaderValue::from_static("nosniff"),
        );
        self.write_header(status);
        self.body.extend_from_slice(msg.as_bytes());
        self.body.push(b'\n');
    }

    pub fn unmarshal<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        if self.status.as_u16() >= 400 {
            return Err(HttpError::Status(self.status.as_u16()));
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}

impl Write for ResponseRecorder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// The status and plain-text body a failed `res` should be answered with.
pub fn error_response<T, E: Display>(
    res: &Result<T, E>,
    status: StatusCode,
) -> Option<(StatusCode, String)> {
    res.as_ref().err().map(|e| (status, e.to_string()))
}

/// Reply with the error and `status` when `res` failed. Returns whether an
/// error was written.
pub fn handle_error<T, E: Display>(
    w: &mut ResponseRecorder,
    res: &Result<T, E>,
    status: StatusCode,
) -> bool {
    match error_response(res, status) {
        Some((status, msg)) => {
            w.error(&msg, status);
            true
        }
        None => false,
    }
}
