//! Flatten arbitrary payloads into context lines for the chat assistant.

use serde_json::Value;

/// Convert a payload into ordered, human-readable lines.
///
/// - array: one line per element; strings verbatim, anything else as compact JSON
/// - string: split on `\n`, empty lines dropped
/// - object: `"key: value"` per entry in mapping order
/// - null, bool, number: no lines
#[must_use]
pub fn normalize_to_lines(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(scalar_text).collect(),
        Value::String(text) => text
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(key, v)| format!("{key}: {}", scalar_text(v)))
            .collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) => Vec::new(),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
