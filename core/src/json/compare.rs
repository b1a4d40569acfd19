use serde::Serialize;
use serde_json::Value;

use crate::map::{contains_recursive, deep_equal};

fn parse_pair(s1: &[u8], s2: &[u8]) -> Option<(Value, Value)> {
    let o1 = serde_json::from_slice::<Value>(s1).ok()?;
    let o2 = serde_json::from_slice::<Value>(s2).ok()?;
    Some((o1, o2))
}

/// Both documents parse and are structurally equal. Object key order is
/// irrelevant and numbers compare by value.
pub fn json_equal(s1: &[u8], s2: &[u8]) -> bool {
    parse_pair(s1, s2).is_some_and(|(o1, o2)| deep_equal(&o1, &o2))
}

/// Both documents parse and the first contains the second (see
/// [`contains_recursive`]).
pub fn json_contains(s1: &[u8], s2: &[u8]) -> bool {
    parse_pair(s1, s2).is_some_and(|(o1, o2)| contains_recursive(&o1, &o2))
}

pub fn json_str_equal(s1: &str, s2: &str) -> bool {
    json_equal(s1.as_bytes(), s2.as_bytes())
}

pub fn json_str_contains(s1: &str, s2: &str) -> bool {
    json_contains(s1.as_bytes(), s2.as_bytes())
}

/// Serialise both values and compare with [`json_contains`]. False when
/// either side fails to serialise.
pub fn json_marshal_contains<A, B>(i1: &A, i2: &B) -> bool
where
    A: Serialize + ?Sized,
    B: Serialize + ?Sized,
{
    let (Ok(buf1), Ok(buf2)) = (serde_json::to_vec(i1), serde_json::to_vec(i2)) else {
        return false;
    };
    json_contains(&buf1, &buf2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_json_contains() {
        let cases = [
            ("1", "1", true),
            ("[1, 2, 3]", "[1, 2, 3]", true),
            ("[1, 2, 3]", "[1, 2]", false),
            (r#"{"a":1,"b":2}"#, r#"{"b":2,"a":1}"#, true),
            (r#"{"a":1,"b":2}"#, r#"{"b":2}"#, true),
            (r#"{"a":1,"b":2}"#, r#"{"b":1,"a":1}"#, false),
            (r#"{"a":1,"b":2}"#, r#"{"c":2,"a":1}"#, false),
        ];
        for (v1, v2, ok) in cases {
            assert_eq!(json_contains(v1.as_bytes(), v2.as_bytes()), ok, "{v1} / {v2}");
        }
    }

    #[test]
    fn test_json_equal_ignores_key_order() {
        assert!(json_str_equal(r#"{"a":1,"b":[true,null]}"#, r#"{"b":[true,null],"a":1.0}"#));
        assert!(!json_str_equal(r#"{"a":1}"#, r#"{"a":1,"b":2}"#));
    }

    #[test]
    fn test_invalid_json_never_matches() {
        assert!(!json_str_equal("{", "{"));
        assert!(!json_str_contains("{}", "not json"));
    }

    #[test]
    fn test_json_marshal_contains() {
        let mut outer = HashMap::new();
        outer.insert("name", "kit");
        outer.insert("kind", "bag");
        let mut inner = HashMap::new();
        inner.insert("kind", "bag");
        assert!(json_marshal_contains(&outer, &inner));
        assert!(!json_marshal_contains(&inner, &outer));

        let mut bad: HashMap<Vec<u8>, i32> = HashMap::new();
        bad.insert(vec![0], 0);
        assert!(!json_marshal_contains(&bad, &inner));
    }
}
