//! Empty-value filtering for submission payloads.
//!
//! Before submitting form data, hosts typically want to strip fields the
//! user left blank while keeping everything the schema insists on. This is
//! an independent utility, not part of the validation pipeline.

use serde_json::{Map, Value};

/// Returns a copy of `data` with non-required, empty-valued fields removed.
///
/// A key is retained if it appears in the schema's `required` list at the
/// current nesting level, or if its value is non-empty. "Empty" means null,
/// an empty string, or an object/array all of whose members are themselves
/// empty. Nested objects are filtered recursively when the sub-schema for
/// that key carries its own `properties` or `required`; otherwise the value
/// is treated as opaque and only the top-level emptiness test applies.
/// Arrays are opaque leaves, never filtered per-element.
///
/// The input is never mutated, and the function is idempotent.
///
/// # Example
///
/// ```rust
/// use formcheck::filter_empty_values;
/// use serde_json::json;
///
/// let schema = json!({
///     "type": "object",
///     "required": ["acceptTerms"],
///     "properties": {
///         "acceptTerms": {"type": "boolean"},
///         "nickname": {"type": "string"}
///     }
/// });
/// let data = json!({"acceptTerms": false, "nickname": ""});
///
/// assert_eq!(
///     filter_empty_values(&data, &schema),
///     json!({"acceptTerms": false})
/// );
/// ```
pub fn filter_empty_values(data: &Value, schema: &Value) -> Value {
    let Value::Object(map) = data else {
        return data.clone();
    };

    let properties = schema.get("properties");
    let mut filtered = Map::new();

    for (key, value) in map {
        let sub_schema = properties.and_then(|p| p.get(key));
        let value = match (value, sub_schema) {
            (Value::Object(_), Some(sub)) if has_nested_shape(sub) => {
                filter_empty_values(value, sub)
            }
            _ => value.clone(),
        };

        if is_required(schema, key) || !is_empty_value(&value) {
            filtered.insert(key.clone(), value);
        }
    }

    Value::Object(filtered)
}

/// True when the sub-schema describes its own object shape, making
/// per-field recursion meaningful.
fn has_nested_shape(schema: &Value) -> bool {
    schema.get("properties").is_some() || schema.get("required").is_some()
}

/// True when `key` appears in the schema's `required` list.
fn is_required(schema: &Value, key: &str) -> bool {
    schema
        .get("required")
        .and_then(Value::as_array)
        .is_some_and(|required| required.iter().any(|name| name.as_str() == Some(key)))
}

/// The emptiness rule: null, empty string, or a container all of whose
/// members are empty. Booleans and numbers are never empty, so `false` and
/// `0` survive filtering even when not required.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Object(map) => map.values().all(is_empty_value),
        Value::Array(items) => items.iter().all(is_empty_value),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
