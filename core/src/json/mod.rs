mod compare;
mod message;

pub use compare::{json_contains, json_equal, json_marshal_contains, json_str_contains, json_str_equal};
pub use message::{simple_json_data, simple_json_error, Data, JsonError, JsonMsg};
