use kitbag_core::error::{HttpError, QueueError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("command failed: {0}")]
    Command(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("invalid input at line {line}: {message}")]
    Input { line: usize, message: String },
    #[error("queue error: {0}")]
    Queue(#[from] QueueError),
    #[error("http error: {0}")]
    Http(#[from] HttpError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
