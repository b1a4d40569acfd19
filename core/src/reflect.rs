//! Struct introspection through serde.

use serde::Serialize;
use serde_json::Value;

use crate::error::UtilError;
use crate::map::Map;

pub fn is_string_key_map(v: &Value) -> bool {
    v.is_object()
}

pub(crate) fn kind_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Field map of a serialisable struct. With no `keys` every field is
/// returned; otherwise only the named fields that exist.
pub fn struct_to_map<T: Serialize + ?Sized>(val: &T, keys: &[&str]) -> Result<Map, UtilError> {
    let fields = match serde_json::to_value(val)? {
        Value::Object(m) => m,
        other => return Err(UtilError::NotAStruct(kind_name(&other).to_string())),
    };
    if keys.is_empty() {
        return Ok(fields);
    }
    Ok(crate::map::pick_map(&fields, keys))
}
