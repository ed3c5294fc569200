//! Deep camelCase → snake_case key renaming
//!
//! The upstream subscription API speaks snake_case while the frontend and
//! this service speak camelCase. The transform renames keys only; values and
//! array order are untouched.

use serde_json::Value;

/// Recursively rename every object key from camelCase to snake_case.
pub fn decamelize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (decamelize(&key), decamelize_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(decamelize_keys).collect()),
        other => other,
    }
}

/// Rename a single key: "lastFourNum" → "last_four_num".
fn decamelize(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
