//! # Formcheck
//!
//! Schema-driven form validation with navigable, field-addressable error
//! reports.
//!
//! ## Overview
//!
//! Given a JSON-Schema document and a data object, formcheck runs schema
//! validation (delegated to the `jsonschema` crate), merges in optional
//! user-supplied business rules, and reshapes the result into two views of
//! the same errors: a flat ordered list for display, and a tree structured
//! like the data itself so every field can look up its own messages
//! without a presence check.
//!
//! ## Core Types
//!
//! - [`JsonPath`]: paths to values in nested form data (e.g., `users[0].email`)
//! - [`ValidationError`]: a single raw schema violation with path context
//! - [`ErrorSchema`]: the error tree mirroring the data's shape
//! - [`ErrorAccumulator`]: append-only handle custom validators use to add errors
//! - [`FormValidator`]: compiled schema plus custom-validation and transform hooks
//!
//! ## Example
//!
//! ```rust
//! use formcheck::validate_form_data;
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "required": ["foo"],
//!     "properties": {
//!         "foo": {"type": "string"},
//!         "bar": {"type": "string"}
//!     }
//! });
//!
//! let report = validate_form_data(&json!({}), &schema).unwrap();
//! assert_eq!(report.errors.len(), 1);
//! assert_eq!(
//!     report.errors[0].message.as_deref(),
//!     Some(r#"requires property "foo""#)
//! );
//!
//! // Every key the schema declares has a node, even without errors.
//! assert!(report.error_schema.field("bar").unwrap().errors().is_empty());
//! ```

pub mod accumulator;
pub mod error;
pub mod error_schema;
pub mod filter;
pub mod path;
pub mod validator;

pub use accumulator::ErrorAccumulator;
pub use error::{CustomError, FlatError, ValidateError, ValidationError};
pub use error_schema::{to_error_list, ErrorSchema, ERRORS_KEY};
pub use filter::filter_empty_values;
pub use path::{JsonPath, PathSegment};
pub use validator::{validate_form_data, FormValidator, ValidationReport};
