//! Error types for the validation pipeline.
//!
//! Schema violations are never surfaced as `Err`: they are data, carried as
//! [`ValidationError`] values and the error tree built from them. The only
//! fallible operations are compiling a schema and running a user-supplied
//! custom validation function, both covered by [`ValidateError`].

use std::fmt::{self, Display};

use thiserror::Error;

use crate::path::JsonPath;

/// Failure returned by a custom validation function.
///
/// Custom validators are host-supplied business rules; whatever error type
/// they produce is boxed and propagated unchanged.
pub type CustomError = Box<dyn std::error::Error + Send + Sync>;

/// A failure of the validation call itself, as opposed to a validation
/// *result* (which is always reported as data).
#[derive(Debug, Error)]
pub enum ValidateError {
    /// The schema document could not be compiled by the underlying
    /// JSON-Schema validator.
    #[error("schema compilation failed: {0}")]
    InvalidSchema(String),

    /// A custom validation function failed. Custom failures are never
    /// caught-and-continued: partial custom results would be misleading,
    /// so the whole validation call aborts.
    #[error("custom validation failed")]
    Custom(#[source] CustomError),
}

/// A single raw validation error produced by the schema validator adapter.
///
/// Immutable once produced: the pipeline reshapes raw errors into trees and
/// flat lists but never edits them in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Path to the value that failed validation, as raw segments.
    pub path: JsonPath,
    /// Human-readable description of the violation.
    pub message: String,
    /// One-line `"path: message"` rendering, with the root labeled `root`.
    pub stack: String,
    /// JSON Pointer into the schema identifying the violated rule.
    pub schema_path: String,
}

impl ValidationError {
    /// Creates a new raw validation error, deriving the `stack` line from
    /// the path and message.
    pub fn new(path: JsonPath, message: impl Into<String>, schema_path: impl Into<String>) -> Self {
        let message = message.into();
        let label = if path.is_root() {
            "root".to_string()
        } else {
            path.to_string()
        };
        let stack = format!("{}: {}", label, message);
        Self {
            path,
            message,
            stack,
            schema_path: schema_path.into(),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stack)
    }
}

/// A single line of the flat error list surfaced to callers.
///
/// Entries derived straight from raw validator output carry the full
/// `message` / `path` / `schema_path` context; entries re-derived by
/// flattening the merged error tree carry only the `stack` line, since the
/// tree stores bare messages.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatError {
    /// One-line `"label: message"` rendering.
    pub stack: String,
    /// Original message, when derived from a raw validator error.
    pub message: Option<String>,
    /// Data path, when derived from a raw validator error.
    pub path: Option<JsonPath>,
    /// Violated schema rule, when derived from a raw validator error.
    pub schema_path: Option<String>,
}

impl FlatError {
    /// Creates an entry carrying only a stack line, as produced by
    /// flattening an error tree.
    pub fn from_stack(stack: impl Into<String>) -> Self {
        Self {
            stack: stack.into(),
            message: None,
            path: None,
            schema_path: None,
        }
    }
}

impl From<&ValidationError> for FlatError {
    fn from(error: &ValidationError) -> Self {
        Self {
            stack: error.stack.clone(),
            message: Some(error.message.clone()),
            path: Some(error.path.clone()),
            schema_path: Some(error.schema_path.clone()),
        }
    }
}

impl Display for FlatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_stack() {
        let error = ValidationError::new(
            JsonPath::root().push_field("foo"),
            "does not meet minimum length of 10",
            "/properties/foo/minLength",
        );
        assert_eq!(error.stack, "foo: does not meet minimum length of 10");
        assert_eq!(error.to_string(), error.stack);
    }

    #[test]
    fn test_validation_error_root_label() {
        let error = ValidationError::new(JsonPath::root(), r#"requires property "foo""#, "/required");
        assert_eq!(error.stack, r#"root: requires property "foo""#);
    }

    #[test]
    fn test_flat_error_mirrors_raw_fields() {
        let raw = ValidationError::new(
            JsonPath::root().push_field("age"),
            "must be greater than or equal to 0",
            "/properties/age/minimum",
        );
        let flat = FlatError::from(&raw);
        assert_eq!(flat.stack, raw.stack);
        assert_eq!(flat.message.as_deref(), Some(raw.message.as_str()));
        assert_eq!(flat.path, Some(raw.path.clone()));
        assert_eq!(flat.schema_path.as_deref(), Some(raw.schema_path.as_str()));
    }

    #[test]
    fn test_flat_error_from_stack_only() {
        let flat = FlatError::from_stack("pass2: passwords don't match.");
        assert_eq!(flat.stack, "pass2: passwords don't match.");
        assert!(flat.message.is_none());
        assert!(flat.path.is_none());
        assert!(flat.schema_path.is_none());
    }

    #[test]
    fn test_validate_error_display() {
        let err = ValidateError::InvalidSchema("not an object".to_string());
        assert!(err.to_string().contains("schema compilation failed"));
    }
}
