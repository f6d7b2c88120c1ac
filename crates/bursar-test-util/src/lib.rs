//! Shared test utilities for the bursar workspace.

use serde_json::Value;

/// Normalize non-deterministic JSON fields for golden comparison.
///
/// - `tool.version` becomes `"__VERSION__"`, only on a root object that looks like an
///   outcome report (`schema`, `tool`, `outcome` all present).
/// - `evaluated_at` becomes `"__TIMESTAMP__"` at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_report =
            obj.contains_key("schema") && obj.contains_key("tool") && obj.contains_key("outcome");
        if is_report
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if map.contains_key("evaluated_at") {
                map.insert(
                    "evaluated_at".to_string(),
                    Value::String("__TIMESTAMP__".to_string()),
                );
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}
