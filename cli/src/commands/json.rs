use kitbag_core::json::{json_str_contains, json_str_equal};

use super::cli::{JsonArgs, JsonOp};

/// Unparsable documents compare as false.
pub fn evaluate(args: &JsonArgs) -> bool {
    let res = match args.op {
        JsonOp::Equal => json_str_equal(&args.left, &args.right),
        JsonOp::Contains => json_str_contains(&args.left, &args.right),
    };
    tracing::debug!(
        target: "kitbag.cli",
        stage = "json.compare",
        op = ?args.op,
        result = res
    );
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(op: JsonOp, left: &str, right: &str) -> JsonArgs {
        JsonArgs {
            op,
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    #[test]
    fn test_evaluate() {
        assert!(evaluate(&args(JsonOp::Equal, r#"{"a":1,"b":2}"#, r#"{"b":2,"a":1}"#)));
        assert!(evaluate(&args(JsonOp::Contains, r#"{"a":{"x":1,"y":2}}"#, r#"{"a":{"x":1}}"#)));
        assert!(!evaluate(&args(JsonOp::Contains, r#"{"a":1}"#, r#"{"b":1}"#)));
        assert!(!evaluate(&args(JsonOp::Equal, "{", "{")));
    }
}
