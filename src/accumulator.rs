//! Append-only error handle passed to custom validation functions.
//!
//! [`ErrorAccumulator`] is the mutation surface a custom validator is
//! permitted to use: navigate to a path with [`field`](ErrorAccumulator::field)
//! / [`index`](ErrorAccumulator::index), then append messages with
//! [`add_error`](ErrorAccumulator::add_error). It is a thin handle over the
//! same [`ErrorSchema`] tree the pipeline returns, so mutations are visible
//! immediately — there is no copy to merge back.
//!
//! The handle borrows the tree mutably, which confines it to the validation
//! call that created it: it cannot be retained and mutated after that call
//! returns.

use crate::error_schema::ErrorSchema;
use crate::path::PathSegment;

/// A live, append-only view over an [`ErrorSchema`] subtree.
///
/// Navigation lazily creates empty nodes, so a custom validator can attach
/// messages at paths untouched by schema validation, including keys that
/// are not valid identifiers. There is no way to remove or reorder
/// previously added messages.
///
/// # Example
///
/// ```rust
/// use formcheck::{ErrorAccumulator, ErrorSchema};
///
/// let mut tree = ErrorSchema::new();
/// let mut acc = ErrorAccumulator::new(&mut tree);
/// acc.field("pass2").add_error("passwords don't match.");
///
/// assert_eq!(tree.field("pass2").unwrap().errors(), ["passwords don't match."]);
/// ```
#[derive(Debug)]
pub struct ErrorAccumulator<'a> {
    node: &'a mut ErrorSchema,
}

impl<'a> ErrorAccumulator<'a> {
    /// Creates an accumulator rooted at the given node.
    pub fn new(node: &'a mut ErrorSchema) -> Self {
        Self { node }
    }

    /// Returns an accumulator for a property, creating its node if absent.
    ///
    /// The name is used as an opaque key; no character is special.
    pub fn field(&mut self, name: impl Into<String>) -> ErrorAccumulator<'_> {
        ErrorAccumulator {
            node: self.node.child_or_insert(PathSegment::field(name.into())),
        }
    }

    /// Returns an accumulator for an array index, creating its node if
    /// absent.
    pub fn index(&mut self, idx: usize) -> ErrorAccumulator<'_> {
        ErrorAccumulator {
            node: self.node.child_or_insert(PathSegment::index(idx)),
        }
    }

    /// Appends a message at the current path, preserving call order.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.node.add_error(message);
    }
}
