//! Integration tests for the error tree, accumulator, and flattening.

use formcheck::{
    to_error_list, ErrorAccumulator, ErrorSchema, JsonPath, PathSegment, ValidationError,
};
use serde_json::json;

fn raw(path: JsonPath, message: &str) -> ValidationError {
    ValidationError::new(path, message, "/properties")
}

#[test]
fn test_flattening_round_trip_one_entry_per_message() {
    let errors = vec![
        raw(JsonPath::root(), "is not quite right"),
        raw(JsonPath::root().push_field("name"), "is required"),
        raw(JsonPath::root().push_field("name"), "is too short"),
        raw(
            JsonPath::root().push_field("address").push_field("city"),
            "is unknown",
        ),
    ];

    let tree = ErrorSchema::from_raw_errors(&errors);
    let list = to_error_list(&tree);

    // One entry per message, depth-first node order, root labeled "root"
    // and every other node labeled by its own key.
    let stacks: Vec<_> = list.iter().map(|e| e.stack.as_str()).collect();
    assert_eq!(
        stacks,
        [
            "root: is not quite right",
            "name: is required",
            "name: is too short",
            "city: is unknown",
        ]
    );
}

#[test]
fn test_flattening_skips_message_free_nodes() {
    let mut tree = ErrorSchema::new();
    tree.populate_skeleton(&json!({"a": {"b": 1}, "c": 2}), &json!({}));
    tree.node_at_mut(&JsonPath::root().push_field("c"))
        .add_error("is wrong");

    let list = to_error_list(&tree);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].stack, "c: is wrong");
}

#[test]
fn test_accumulator_mutations_share_storage_with_tree() {
    let mut tree = ErrorSchema::from_raw_errors(&[raw(
        JsonPath::root().push_field("email"),
        "is not an email",
    )]);

    {
        let mut acc = ErrorAccumulator::new(&mut tree);
        acc.field("email").add_error("is already registered");
        acc.field("age").add_error("is required");
    }

    // No merge step: the accumulator wrote straight into the tree.
    assert_eq!(
        tree.field("email").unwrap().errors(),
        ["is not an email", "is already registered"]
    );
    assert_eq!(tree.field("age").unwrap().errors(), ["is required"]);
}

#[test]
fn test_indices_and_fields_share_navigation() {
    let mut tree = ErrorSchema::new();
    let mut acc = ErrorAccumulator::new(&mut tree);
    acc.field("rows").index(3).field("amount").add_error("is negative");

    let path = JsonPath::root()
        .push_field("rows")
        .push_index(3)
        .push_field("amount");
    assert_eq!(tree.at_path(&path).unwrap().errors(), ["is negative"]);

    let value = tree.to_value();
    assert_eq!(value["rows"]["3"]["amount"]["__errors"], json!(["is negative"]));
}

#[test]
fn test_builder_handles_hostile_keys() {
    let keys = [
        "with space",
        "quote'key",
        r#"double"quote"#,
        "bracket[0]",
        "dot.separated",
        "plus+minus-",
    ];

    let errors: Vec<_> = keys
        .iter()
        .map(|k| raw(JsonPath::root().push_field(*k), "is invalid"))
        .collect();
    let tree = ErrorSchema::from_raw_errors(&errors);

    for key in keys {
        assert_eq!(
            tree.field(key).unwrap().errors(),
            ["is invalid"],
            "lost errors for key {key:?}"
        );
    }
    assert_eq!(to_error_list(&tree).len(), keys.len());
}

#[test]
fn test_builder_is_side_effect_free_on_inputs() {
    let errors = vec![raw(JsonPath::root().push_field("x"), "is bad")];
    let before = errors.clone();

    let _first = ErrorSchema::from_raw_errors(&errors);
    let second = ErrorSchema::from_raw_errors(&errors);

    assert_eq!(errors, before);
    assert_eq!(second.field("x").unwrap().errors(), ["is bad"]);
}

#[test]
fn test_json_view_always_carries_reserved_key() {
    let mut tree = ErrorSchema::new();
    tree.child_or_insert(PathSegment::field("untouched"));

    let value = tree.to_value();
    assert_eq!(value["__errors"], json!([]));
    assert_eq!(value["untouched"]["__errors"], json!([]));
}
