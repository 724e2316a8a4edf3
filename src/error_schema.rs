//! The error tree mirroring form data shape.
//!
//! This module provides [`ErrorSchema`], a recursive tree keyed by the same
//! property names and array indices as the form data it describes. Every
//! node carries a reserved list of messages attached directly at that path,
//! present (possibly empty) even at leaves, so consumers can always look up
//! "my errors" at their own path without a presence check.
//!
//! Keys are opaque: a property name full of quotes, brackets, or operators
//! is stored and looked up as-is, never parsed.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{FlatError, ValidationError};
use crate::path::{JsonPath, PathSegment};

/// Reserved key under which a node's own messages appear in the JSON view
/// produced by [`ErrorSchema::to_value`].
pub const ERRORS_KEY: &str = "__errors";

/// A node in the error tree.
///
/// Each node holds an ordered list of messages attached at its own path and
/// an insertion-ordered map of child nodes. The tree's shape mirrors the
/// form data for every path at which an error was recorded or an
/// accumulator access occurred.
///
/// # Example
///
/// ```rust
/// use formcheck::{ErrorSchema, PathSegment};
///
/// let mut tree = ErrorSchema::new();
/// tree.child_or_insert(PathSegment::field("pass2"))
///     .add_error("passwords don't match.");
///
/// let node = tree.field("pass2").unwrap();
/// assert_eq!(node.errors(), ["passwords don't match."]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorSchema {
    errors: Vec<String>,
    children: IndexMap<PathSegment, ErrorSchema>,
}

impl ErrorSchema {
    /// Creates an empty node with no messages and no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an error tree from a flat list of raw validator errors.
    ///
    /// Each error's path is walked from the root, creating intermediate
    /// nodes on demand, and its message is appended at the terminal node.
    /// Errors with an empty path land on the root node itself. Building is
    /// deterministic and never fails, whatever the key content.
    pub fn from_raw_errors(errors: &[ValidationError]) -> Self {
        let mut root = Self::new();
        root.extend_from_raw(errors);
        root
    }

    /// Appends the messages of a flat list of raw errors into this tree,
    /// preserving list order.
    pub fn extend_from_raw(&mut self, errors: &[ValidationError]) {
        for error in errors {
            self.node_at_mut(&error.path).add_error(error.message.clone());
        }
    }

    /// Pre-creates an empty node for every key present in `data`, recursing
    /// through objects and arrays, plus one for every schema-declared
    /// property absent from the data.
    ///
    /// Existing nodes and messages are left untouched, so the skeleton can
    /// be populated before or after raw errors are applied.
    pub fn populate_skeleton(&mut self, data: &Value, schema: &Value) {
        match data {
            Value::Object(map) => {
                let properties = schema.get("properties");
                for (key, value) in map {
                    let sub_schema = properties.and_then(|p| p.get(key)).unwrap_or(&Value::Null);
                    self.child_or_insert(PathSegment::field(key.clone()))
                        .populate_skeleton(value, sub_schema);
                }
                if let Some(Value::Object(properties)) = properties {
                    for key in properties.keys() {
                        if !map.contains_key(key) {
                            self.child_or_insert(PathSegment::field(key.clone()));
                        }
                    }
                }
            }
            Value::Array(items) => {
                let item_schema = schema.get("items").unwrap_or(&Value::Null);
                for (idx, value) in items.iter().enumerate() {
                    self.child_or_insert(PathSegment::index(idx))
                        .populate_skeleton(value, item_schema);
                }
            }
            _ => {}
        }
    }

    /// Appends a message to this node's own message list.
    ///
    /// Messages are append-only: nothing in the public API removes or
    /// reorders previously added messages.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Returns the messages attached directly at this node, in the order
    /// they were added.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns the child node for a property name, if present.
    pub fn field(&self, name: &str) -> Option<&ErrorSchema> {
        self.children.get(&PathSegment::field(name))
    }

    /// Returns the child node for an array index, if present.
    pub fn index(&self, idx: usize) -> Option<&ErrorSchema> {
        self.children.get(&PathSegment::index(idx))
    }

    /// Returns the node at the given path, if every segment is present.
    pub fn at_path(&self, path: &JsonPath) -> Option<&ErrorSchema> {
        let mut node = self;
        for segment in path.segments() {
            node = node.children.get(segment)?;
        }
        Some(node)
    }

    /// Returns the child node for a segment, creating an empty one if
    /// absent.
    ///
    /// This is the explicit get-or-create operation backing lazy skeleton
    /// growth: accessing a previously unvisited path materializes an empty
    /// node, including for keys that are not valid identifiers.
    pub fn child_or_insert(&mut self, segment: PathSegment) -> &mut ErrorSchema {
        self.children.entry(segment).or_default()
    }

    /// Returns the node at the given path, creating intermediate nodes on
    /// demand.
    pub fn node_at_mut(&mut self, path: &JsonPath) -> &mut ErrorSchema {
        let mut node = self;
        for segment in path.segments() {
            node = node.child_or_insert(segment.clone());
        }
        node
    }

    /// Returns an iterator over the child nodes in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&PathSegment, &ErrorSchema)> {
        self.children.iter()
    }

    /// Returns true if no node anywhere in this subtree holds a message.
    ///
    /// Skeleton nodes do not count: a tree of empty nodes is empty.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.children.values().all(ErrorSchema::is_empty)
    }

    /// Renders this subtree as a JSON value.
    ///
    /// Every node becomes an object with the reserved [`ERRORS_KEY`] holding
    /// its own messages (always present, possibly empty) plus one entry per
    /// child, keyed by property name or stringified index.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            ERRORS_KEY.to_string(),
            Value::Array(self.errors.iter().cloned().map(Value::String).collect()),
        );
        for (segment, child) in &self.children {
            map.insert(segment.to_string(), child.to_value());
        }
        Value::Object(map)
    }
}

/// Flattens an error tree into an ordered list of one-line entries.
///
/// Traversal is depth-first: each node's own messages are emitted before
/// its children, children in insertion order. The root node is labeled
/// `"root"`; every other node is labeled by its own key only, not the full
/// path. Callers needing ancestor context should read the tree directly.
///
/// This is a pure utility, usable standalone for reporting.
///
/// # Example
///
/// ```rust
/// use formcheck::{to_error_list, ErrorSchema, PathSegment};
///
/// let mut tree = ErrorSchema::new();
/// tree.add_error("is invalid");
/// tree.child_or_insert(PathSegment::field("email"))
///     .add_error("must contain @");
///
/// let list = to_error_list(&tree);
/// assert_eq!(list[0].stack, "root: is invalid");
/// assert_eq!(list[1].stack, "email: must contain @");
/// ```
pub fn to_error_list(error_schema: &ErrorSchema) -> Vec<FlatError> {
    let mut out = Vec::new();
    flatten_into(error_schema, "root", &mut out);
    out
}

fn flatten_into(node: &ErrorSchema, label: &str, out: &mut Vec<FlatError>) {
    for message in node.errors() {
        out.push(FlatError::from_stack(format!("{}: {}", label, message)));
    }
    for (segment, child) in node.children() {
        flatten_into(child, &segment.to_string(), out);
    }
}
