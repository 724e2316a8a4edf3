//! Integration tests for the empty-value filter.

use formcheck::filter_empty_values;
use serde_json::json;

#[test]
fn test_required_field_retained_despite_falsy_value() {
    let schema = json!({
        "type": "object",
        "required": ["acceptTerms"],
        "properties": {
            "acceptTerms": {"type": "boolean"},
            "comment": {"type": "string"}
        }
    });
    let data = json!({"acceptTerms": false, "comment": ""});

    let filtered = filter_empty_values(&data, &schema);
    assert_eq!(filtered, json!({"acceptTerms": false}));
}

#[test]
fn test_filter_is_idempotent() {
    let schema = json!({
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": {"type": "string"},
            "profile": {
                "type": "object",
                "required": ["bio"],
                "properties": {"bio": {}, "website": {}}
            }
        }
    });
    let data = json!({
        "name": "",
        "nickname": null,
        "profile": {"bio": "", "website": "", "age": 30}
    });

    let once = filter_empty_values(&data, &schema);
    let twice = filter_empty_values(&once, &schema);

    assert_eq!(once, twice);
    // Required keys survive even when empty; the rest only when non-empty.
    assert_eq!(
        once,
        json!({"name": "", "profile": {"bio": "", "age": 30}})
    );
}

#[test]
fn test_unknown_keys_follow_the_plain_emptiness_rule() {
    let schema = json!({"type": "object", "properties": {}});
    let data = json!({"stray": "", "kept": "value", "zero": 0});

    assert_eq!(
        filter_empty_values(&data, &schema),
        json!({"kept": "value", "zero": 0})
    );
}

#[test]
fn test_opaque_object_without_nested_schema() {
    // No nested properties/required for "blob": only the top-level
    // emptiness test applies, so its inner empty fields are kept.
    let schema = json!({"type": "object", "properties": {"blob": {"type": "object"}}});
    let data = json!({"blob": {"a": "", "b": "x"}});

    assert_eq!(filter_empty_values(&data, &schema), data);
}

#[test]
fn test_required_array_retained_when_all_elements_empty() {
    let schema = json!({
        "type": "object",
        "required": ["tags"],
        "properties": {"tags": {"type": "array", "items": {"type": "string"}}}
    });
    let data = json!({"tags": ["", ""]});

    // Arrays are opaque leaves; requiredness keeps the field whole.
    assert_eq!(filter_empty_values(&data, &schema), data);
}
