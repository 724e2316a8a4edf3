//! The validation pipeline: schema validation, custom rules, and reporting.
//!
//! [`FormValidator`] compiles a JSON-Schema document once, then turns each
//! `(data)` call into a [`ValidationReport`]: a flat error list for display
//! plus an [`ErrorSchema`] tree keyed like the data for per-field lookup.
//!
//! The underlying JSON-Schema algorithm is delegated to the `jsonschema`
//! crate; this module only adapts its output (raw segment paths, normalized
//! messages) and layers the custom-validation and transform hooks on top.

use serde_json::Value;

use crate::accumulator::ErrorAccumulator;
use crate::error::{CustomError, FlatError, ValidateError, ValidationError};
use crate::error_schema::{to_error_list, ErrorSchema};
use crate::path::JsonPath;

/// A user-supplied business-rule validation function.
///
/// Receives the form data and an accumulator rooted at the merged error
/// tree; appends zero or more messages at arbitrary paths. Returning `Err`
/// aborts the whole validation call.
pub type CustomValidateFn =
    Box<dyn Fn(&Value, &mut ErrorAccumulator<'_>) -> Result<(), CustomError> + Send + Sync>;

/// An optional final pass rewriting the flat error list (e.g., for
/// localization) before it is surfaced. The error tree is not affected.
pub type TransformErrorsFn = Box<dyn Fn(Vec<FlatError>) -> Vec<FlatError> + Send + Sync>;

/// The result of one validation call.
///
/// `errors` is the flat, ordered list for display; `error_schema` is the
/// tree keyed identically to the data's shape, with an (often empty)
/// message list at every node. When a transform hook rewrote the flat
/// list, the tree intentionally keeps the original messages.
#[derive(Debug)]
pub struct ValidationReport {
    /// Flat, ordered error list, post-transform if a transform was set.
    pub errors: Vec<FlatError>,
    /// Error tree mirroring the data's shape.
    pub error_schema: ErrorSchema,
}

impl ValidationReport {
    /// Returns true if the flat error list is empty.
    ///
    /// Callers typically block submission when this is false.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A reusable validator for one schema, with optional custom-validation and
/// error-transform hooks.
///
/// The schema is compiled once at construction; each [`validate`] call
/// builds a fresh error tree, so no state is shared across calls.
///
/// # Example
///
/// ```rust
/// use formcheck::FormValidator;
/// use serde_json::json;
///
/// let schema = json!({
///     "type": "object",
///     "required": ["name"],
///     "properties": {"name": {"type": "string"}}
/// });
///
/// let validator = FormValidator::new(schema).unwrap();
/// let report = validator.validate(&json!({})).unwrap();
/// assert_eq!(report.errors.len(), 1);
/// assert!(!report.is_valid());
/// ```
///
/// [`validate`]: FormValidator::validate
pub struct FormValidator {
    schema: Value,
    compiled: jsonschema::Validator,
    custom_validate: Option<CustomValidateFn>,
    transform_errors: Option<TransformErrorsFn>,
}

impl FormValidator {
    /// Compiles the schema and creates a validator with no hooks installed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateError::InvalidSchema`] if the document is not a
    /// compilable JSON Schema.
    pub fn new(schema: Value) -> Result<Self, ValidateError> {
        let compiled = jsonschema::validator_for(&schema)
            .map_err(|e| ValidateError::InvalidSchema(e.to_string()))?;
        Ok(Self {
            schema,
            compiled,
            custom_validate: None,
            transform_errors: None,
        })
    }

    /// Installs a custom validation function, replacing any previous one.
    pub fn with_custom_validate<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value, &mut ErrorAccumulator<'_>) -> Result<(), CustomError> + Send + Sync + 'static,
    {
        self.custom_validate = Some(Box::new(f));
        self
    }

    /// Installs an error-transform function, replacing any previous one.
    pub fn with_transform_errors<F>(mut self, f: F) -> Self
    where
        F: Fn(Vec<FlatError>) -> Vec<FlatError> + Send + Sync + 'static,
    {
        self.transform_errors = Some(Box::new(f));
        self
    }

    /// Runs schema validation only, returning the flat ordered list of raw
    /// errors in the underlying validator's native order.
    ///
    /// Paths are carried as raw segment sequences, so property names with
    /// unusual characters pass through unharmed. Messages for common
    /// violations are normalized to stable, form-friendly phrasing; other
    /// violations keep the library's message.
    pub fn raw_errors(&self, data: &Value) -> Vec<ValidationError> {
        self.compiled
            .iter_errors(data)
            .map(|error| {
                let path = JsonPath::from_pointer(&error.instance_path.to_string(), data);
                let message = normalize_message(&error);
                ValidationError::new(path, message, error.schema_path.to_string())
            })
            .collect()
    }

    /// Validates `data` and produces a full report.
    ///
    /// Pipeline: schema validation, error tree build (with a skeleton node
    /// for every key in the data and every schema-declared property), then
    /// the custom validation function, if any, mutates the tree through an
    /// accumulator and the flat list is re-derived from the merged tree,
    /// then the transform hook, if any, rewrites the flat list.
    ///
    /// Without a custom validator the flat entries mirror the raw errors'
    /// full fields; re-derived entries carry only their `stack` line.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateError::Custom`] if the custom validation function
    /// fails; the failure is never swallowed into a partial report.
    pub fn validate(&self, data: &Value) -> Result<ValidationReport, ValidateError> {
        let raw = self.raw_errors(data);

        let mut error_schema = ErrorSchema::new();
        error_schema.populate_skeleton(data, &self.schema);
        error_schema.extend_from_raw(&raw);

        let errors = match &self.custom_validate {
            Some(custom) => {
                let mut accumulator = ErrorAccumulator::new(&mut error_schema);
                custom(data, &mut accumulator).map_err(ValidateError::Custom)?;
                to_error_list(&error_schema)
            }
            None => raw.iter().map(FlatError::from).collect(),
        };

        let errors = match &self.transform_errors {
            Some(transform) => transform(errors),
            None => errors,
        };

        Ok(ValidationReport {
            errors,
            error_schema,
        })
    }
}

/// One-shot entry point: compile the schema and validate `data` against it.
///
/// Use [`FormValidator`] directly to reuse a compiled schema across calls
/// or to install custom-validation / transform hooks.
pub fn validate_form_data(data: &Value, schema: &Value) -> Result<ValidationReport, ValidateError> {
    FormValidator::new(schema.clone())?.validate(data)
}

/// Maps a validator error to stable, form-friendly message text.
///
/// Only violations with a fixed phrasing in form reports are rewritten;
/// everything else falls through to the library's own message.
fn normalize_message(error: &jsonschema::ValidationError<'_>) -> String {
    use jsonschema::error::ValidationErrorKind as Kind;

    match &error.kind {
        Kind::Required { property } => format!("requires property {}", property),
        Kind::MinLength { limit } => format!("does not meet minimum length of {}", limit),
        Kind::MaxLength { limit } => format!("does not meet maximum length of {}", limit),
        Kind::Minimum { limit } => format!("must be greater than or equal to {}", limit),
        Kind::Maximum { limit } => format!("must be less than or equal to {}", limit),
        Kind::Pattern { pattern } => format!("does not match pattern \"{}\"", pattern),
        Kind::Enum { options } => format!("is not one of enum values: {}", options),
        _ => error.to_string(),
    }
}
