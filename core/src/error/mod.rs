pub mod buffer;
#[allow(clippy::module_inception)]
pub mod error;
pub mod http;

pub use buffer::BufferError;
pub use error::{QueueError, UtilError};
pub use http::{HttpError, MalformedRequest};
