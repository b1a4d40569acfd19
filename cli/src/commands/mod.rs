pub mod case;
pub mod cli;
pub mod http;
pub mod json;
pub mod window;
