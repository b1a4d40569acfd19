use thiserror::Error;

/// Errors raised by [`RingAccumulator`](crate::queue::RingAccumulator).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("invalid capacity {0}: a ring needs at least one slot")]
    InvalidCapacity(usize),

    #[error("index {index} out of range for ring of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors from the map, reflection and filesystem helpers.
#[derive(Error, Debug)]
pub enum UtilError {
    #[error("not a string-keyed map: {0}")]
    NotAMap(String),

    #[error("not a structure: {0}")]
    NotAStruct(String),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("{0} is not a file")]
    NotAFile(String),

    #[error("{0} is not a directory")]
    NotADirectory(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
