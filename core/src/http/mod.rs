//! HTTP helpers: a thin `reqwest` client plus framework-neutral server-side
//! body handling.

mod body;
mod client;
mod method;
mod recorder;

pub use body::{
    decode_request_body, has_content_type, unmarshal_body, CT_APP_JSON, CT_FORM, CT_OCTET_STREAM,
};
pub use client::HttpClient;
pub use method::HttpMethod;
pub use recorder::{error_response, handle_error, ResponseRecorder};
