//! Stable re-exports for consumers (`cli` and external crates).
//!
//! Prefer importing from `kitbag_core::api` instead of reaching into internal modules.

pub use crate::config::{
    get_kitbag_data_dir, load_default, load_from_path, HttpConfig, KitbagConfig, LoggingConfig,
    QueueConfig,
};
pub use crate::context::{context_with_kvs, context_with_map, Context, Kv};
pub use crate::error::{BufferError, HttpError, MalformedRequest, QueueError, UtilError};
pub use crate::http::{
    decode_request_body, error_response, handle_error, has_content_type, unmarshal_body,
    HttpClient, HttpMethod, ResponseRecorder, CT_APP_JSON, CT_FORM, CT_OCTET_STREAM,
};
pub use crate::json::{
    json_contains, json_equal, json_marshal_contains, json_str_contains, json_str_equal,
    simple_json_data, simple_json_error, Data, JsonError, JsonMsg,
};
pub use crate::map::{
    contains_recursive, deep_equal, get_map_keys, map_all_keys_exist, map_contains, map_keys,
    pick_map, pick_str_map, str_map_all_keys_exist, str_map_all_non_empty, str_map_contains,
    str_map_keys, str_map_to_map, Map, StrMap,
};
pub use crate::queue::{Additive, FloatQueue, FnReducer, Reducer, RingAccumulator, Xor};
pub use crate::reflect::{is_string_key_map, struct_to_map};
pub use crate::util::{
    camel_to_slug, camel_to_snake, char_in, contains_string, cut_half, cut_left, cut_right,
    dir_exists, exec, file_exists, get_existing_file_info, index_of_char, index_of_string,
    max_f64, min_f64, rand_string, resolve_existing_dir, resolve_existing_file, resolve_path,
    slug_to_camel, slugify, snake_to_camel, ExecSpec,
};
