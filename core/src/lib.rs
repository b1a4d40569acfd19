pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod http;
pub mod json;
pub mod map;
pub mod queue;
pub mod reflect;
pub mod util;
