//! Helpers for string-keyed maps.
//!
//! [`Map`] holds arbitrary JSON values, [`StrMap`] holds plain strings.

use serde_json::Value;
use std::collections::HashMap;

use crate::error::UtilError;
use crate::reflect::kind_name;

pub type Map = serde_json::Map<String, Value>;
pub type StrMap = HashMap<String, String>;

/// Copy of `m` restricted to the requested keys that exist.
pub fn pick_map(m: &Map, keys: &[&str]) -> Map {
    keys.iter()
        .filter_map(|k| m.get(*k).map(|v| (k.to_string(), v.clone())))
        .collect()
}

pub fn pick_str_map(m: &StrMap, keys: &[&str]) -> StrMap {
    keys.iter()
        .filter_map(|k| m.get(*k).map(|v| (k.to_string(), v.clone())))
        .collect()
}

pub fn map_all_keys_exist(m: &Map, keys: &[&str]) -> bool {
    keys.iter().all(|k| m.contains_key(*k))
}

pub fn str_map_all_keys_exist(m: &StrMap, keys: &[&str]) -> bool {
    keys.iter().all(|k| m.contains_key(*k))
}

/// Every key is present and its value is not blank.
pub fn str_map_all_non_empty(m: &StrMap, keys: &[&str]) -> bool {
    keys.iter()
        .all(|k| m.get(*k).is_some_and(|v| !v.trim().is_empty()))
}

pub fn map_keys(m: &Map) -> Vec<String> {
    m.keys().cloned().collect()
}

pub fn str_map_keys(m: &StrMap) -> Vec<String> {
    m.keys().cloned().collect()
}

pub fn str_map_to_map(m: &StrMap) -> Map {
    m.iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect()
}

/// Shallow containment: every entry of `n` appears in `m` with an equal value.
pub fn str_map_contains(m: &StrMap, n: &StrMap) -> bool {
    n.iter().all(|(k, v)| m.get(k) == Some(v))
}

pub fn map_contains(m: &Map, n: &Map) -> bool {
    n.iter()
        .all(|(k, v)| m.get(k).is_some_and(|mv| deep_equal(mv, v)))
}

pub fn get_map_keys(val: &Value) -> Result<Vec<String>, UtilError> {
    match val {
        Value::Object(m) => Ok(map_keys(m)),
        other => Err(UtilError::NotAMap(kind_name(other).to_string())),
    }
}

/// Structural equality where numbers compare by value, so `1` equals `1.0`.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, xv)| y.get(k).is_some_and(|yv| deep_equal(xv, yv)))
        }
        _ => a == b,
    }
}

/// Whether `v1` contains `v2`.
///
/// Equal values contain each other. Otherwise both must be objects and every
/// key of `v2` must exist in `v1` with a value that recursively contains the
/// one in `v2`. Arrays and scalars only match by equality.
pub fn contains_recursive(v1: &Value, v2: &Value) -> bool {
    if deep_equal(v1, v2) {
        return true;
    }
    match (v1, v2) {
        (Value::Object(outer), Value::Object(inner)) => inner
            .iter()
            .all(|(k, iv)| outer.get(k).is_some_and(|ov| contains_recursive(ov, iv))),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn obj(v: Value) -> Map {
        v.as_object().cloned().unwrap()
    }

    fn str_map(pairs: &[(&str, &str)]) -> StrMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_pick_map_skips_missing() {
        let m = obj(json!({"a": 1, "b": [2], "c": null}));
        assert_eq!(pick_map(&m, &["a", "c", "z"]), obj(json!({"a": 1, "c": null})));
    }

    #[test]
    fn test_pick_str_map() {
        let m = str_map(&[("host", "h"), ("port", "80")]);
        assert_eq!(pick_str_map(&m, &["port", "user"]), str_map(&[("port", "80")]));
    }

    #[test]
    fn test_keys_exist_and_non_empty() {
        let m = str_map(&[("a", "x"), ("b", "  ")]);
        assert!(str_map_all_keys_exist(&m, &["a", "b"]));
        assert!(!str_map_all_keys_exist(&m, &["a", "c"]));
        assert!(str_map_all_non_empty(&m, &["a"]));
        assert!(!str_map_all_non_empty(&m, &["a", "b"]));
        assert!(!str_map_all_non_empty(&m, &["c"]));
        assert!(map_all_keys_exist(&obj(json!({"a": 0})), &["a"]));
    }

    #[test]
    fn test_keys() {
        let mut keys = str_map_keys(&str_map(&[("b", "1"), ("a", "2")]));
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map_keys(&obj(json!({"x": 1, "y": 2}))), vec!["x", "y"]);
    }

    #[test]
    fn test_str_map_to_map() {
        let m = str_map_to_map(&str_map(&[("k", "v")]));
        assert_eq!(m, obj(json!({"k": "v"})));
    }

    #[test]
    fn test_shallow_contains() {
        let m = str_map(&[("a", "1"), ("b", "2")]);
        assert!(str_map_contains(&m, &str_map(&[("b", "2")])));
        assert!(!str_map_contains(&m, &str_map(&[("b", "3")])));
        assert!(str_map_contains(&m, &StrMap::new()));

        let jm = obj(json!({"a": {"x": 1}, "b": 2}));
        assert!(map_contains(&jm, &obj(json!({"a": {"x": 1}}))));
        assert!(!map_contains(&jm, &obj(json!({"a": {}}))));
    }

    #[test]
    fn test_get_map_keys() {
        assert_eq!(get_map_keys(&json!({"only": true})).unwrap(), vec!["only"]);
        assert!(matches!(
            get_map_keys(&json!([1, 2])),
            Err(UtilError::NotAMap(kind)) if kind == "array"
        ));
    }

    #[test]
    fn test_contains_recursive() {
        let cases = [
            (json!(1), json!(1), true),
            (json!(1), json!(2), false),
            (json!(1), json!(1.0), true),
            (json!([1, 2, 3]), json!([1, 2, 3]), true),
            (json!([1, 2, 3]), json!([1, 2]), false),
            (json!({"a": 1, "b": 2}), json!({"b": 2, "a": 1}), true),
            (json!({"a": 1, "b": 2}), json!({"b": 1, "a": 1}), false),
            (json!({"a": 1, "b": 2}), json!({"a": 1, "c": 3}), false),
            (json!({"a": {"x": 1, "y": 2}}), json!({"a": {"y": 2}}), true),
            (json!({"a": [1, 2]}), json!({"a": [1]}), false),
            (json!({"a": 1}), json!(null), false),
        ];
        for (v1, v2, ok) in cases {
            assert_eq!(contains_recursive(&v1, &v2), ok, "{v1} contains {v2}");
        }
    }
}
