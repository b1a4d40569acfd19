//! Immutable key/value context chains.
//!
//! A [`Context`] is a cheap-to-clone handle on a linked list of frames. Adding
//! a value never mutates the receiver; it returns a child context whose
//! lookups see the new binding first and fall back to the parent.

use serde_json::Value;
use std::sync::Arc;

use crate::map::Map;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kv {
    pub key: String,
    pub value: Value,
}

impl Kv {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug)]
struct Frame {
    key: String,
    value: Value,
    parent: Option<Arc<Frame>>,
}

#[derive(Debug, Clone, Default)]
pub struct Context {
    frame: Option<Arc<Frame>>,
}

impl Context {
    /// The empty root context.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_value(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            frame: Some(Arc::new(Frame {
                key: key.into(),
                value: value.into(),
                parent: self.frame.clone(),
            })),
        }
    }

    /// Innermost binding for `key`.
    pub fn value(&self, key: &str) -> Option<&Value> {
        let mut cur = self.frame.as_deref();
        while let Some(frame) = cur {
            if frame.key == key {
                return Some(&frame.value);
            }
            cur = frame.parent.as_deref();
        }
        None
    }

    pub fn is_background(&self) -> bool {
        self.frame.is_none()
    }
}

/// Layer every entry of `maps` onto `ctx` (background when `None`). Later maps
/// shadow earlier ones.
pub fn context_with_map(ctx: Option<&Context>, maps: &[Map]) -> Context {
    let mut ctx = ctx.cloned().unwrap_or_default();
    for m in maps {
        for (k, v) in m {
            ctx = ctx.with_value(k.clone(), v.clone());
        }
    }
    ctx
}

pub fn context_with_kvs(ctx: Option<&Context>, kvs: &[Kv]) -> Context {
    let mut ctx = ctx.cloned().unwrap_or_default();
    for kv in kvs {
        ctx = ctx.with_value(kv.key.clone(), kv.value.clone());
    }
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_background_is_empty() {
        let ctx = Context::background();
        assert!(ctx.is_background());
        assert!(ctx.value("anything").is_none());
    }

    #[test]
    fn test_child_does_not_touch_parent() {
        let parent = Context::background().with_value("user", "ann");
        let child = parent.with_value("user", "bob");
        assert_eq!(parent.value("user"), Some(&json!("ann")));
        assert_eq!(child.value("user"), Some(&json!("bob")));
    }

    #[test]
    fn test_context_with_map_layers_maps() {
        let first = json!({"a": 1, "b": 2});
        let second = json!({"b": 3});
        let maps = [
            first.as_object().unwrap().clone(),
            second.as_object().unwrap().clone(),
        ];
        let ctx = context_with_map(None, &maps);
        assert_eq!(ctx.value("a"), Some(&json!(1)));
        assert_eq!(ctx.value("b"), Some(&json!(3)));
    }

    #[test]
    fn test_context_with_kvs_keeps_parent_values() {
        let base = Context::background().with_value("trace", "t-1");
        let ctx = context_with_kvs(
            Some(&base),
            &[Kv::new("user", "ann"), Kv::new("attempt", 2)],
        );
        assert_eq!(ctx.value("trace"), Some(&json!("t-1")));
        assert_eq!(ctx.value("attempt"), Some(&json!(2)));
        assert!(ctx.value("missing").is_none());
    }
}
