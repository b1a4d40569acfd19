//! Envelope for simple JSON API responses: `{"apiVersion", "data", "error"}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::map::StrMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonMsg {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    #[serde(default, skip_serializing_if = "Data::is_empty")]
    pub data: Data,

    #[serde(default, skip_serializing_if = "JsonError::is_empty")]
    pub error: JsonError,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Data {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub payload: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Value>,
}

impl Data {
    pub fn is_empty(&self) -> bool {
        self.kind.is_empty()
            && self.payload.is_empty()
            && self.values.is_empty()
            && self.items.is_empty()
    }

    pub fn add_item<T: Serialize + ?Sized>(&mut self, item: &T) -> Result<(), serde_json::Error> {
        self.items.push(serde_json::to_value(item)?);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonError {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub code: i64,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl JsonError {
    pub fn is_empty(&self) -> bool {
        self.code == 0 && self.message.is_empty()
    }
}

fn is_zero(v: &i64) -> bool {
    *v == 0
}

fn to_pretty(msg: &JsonMsg) -> Vec<u8> {
    // Only strings, integers and already-built Values: serialisation cannot fail.
    serde_json::to_vec_pretty(msg).unwrap_or_default()
}

/// `{"error": {"code", "message"}}`, pretty printed.
pub fn simple_json_error(msg: &str, code: Option<i64>) -> Vec<u8> {
    to_pretty(&JsonMsg {
        error: JsonError {
            code: code.unwrap_or_default(),
            message: msg.to_string(),
        },
        ..JsonMsg::default()
    })
}

/// `{"data": {"kind", "values"}}`, pretty printed.
pub fn simple_json_data(values: &StrMap, kind: Option<&str>) -> Vec<u8> {
    to_pretty(&JsonMsg {
        data: Data {
            kind: kind.unwrap_or_default().to_string(),
            values: values.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            ..Data::default()
        },
        ..JsonMsg::default()
    })
}
