//! Path representation for locating values in form data.
//!
//! This module provides [`JsonPath`] and [`PathSegment`] types for addressing
//! values in nested JSON-like structures. Paths are kept as ordered sequences
//! of raw segments, never pre-joined strings, so property names containing
//! quotes, brackets, whitespace, or other unusual characters survive every
//! stage of the validation pipeline intact.

use std::fmt::{self, Display};

use serde_json::Value;

/// A segment of a path into form data.
///
/// Segments represent either a property access on an object or an index
/// access into an array. Segment content is opaque: a field name is never
/// parsed or evaluated, only used as a mapping key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A property access (e.g., `user`, `email`, or even `a'b"c`).
    Field(String),
    /// An array index access (e.g., `[0]`, `[42]`).
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl Display for PathSegment {
    /// Bare form of the segment: the field name itself, or the index digits.
    ///
    /// Used for error-list labels and JSON object keys, where indices and
    /// fields share a single string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, "{}", name),
            PathSegment::Index(idx) => write!(f, "{}", idx),
        }
    }
}

/// A path to a value in nested form data.
///
/// `JsonPath` represents locations like `users[0].email` and provides
/// methods for building paths incrementally.
///
/// # Example
///
/// ```rust
/// use formcheck::JsonPath;
///
/// let path = JsonPath::root()
///     .push_field("users")
///     .push_index(0)
///     .push_field("email");
///
/// assert_eq!(path.to_string(), "users[0].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with a field segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Parses a JSON Pointer (RFC 6901) into a path, using the instance the
    /// pointer refers into to tell array indices apart from numeric field
    /// names.
    ///
    /// JSON Pointer tokens are unescaped (`~1` becomes `/`, `~0` becomes `~`)
    /// and a token is treated as an index only when the value it descends
    /// into is an array, so an object property named `"0"` stays a field.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formcheck::JsonPath;
    /// use serde_json::json;
    ///
    /// let data = json!({"users": [{"email": "x"}]});
    /// let path = JsonPath::from_pointer("/users/0/email", &data);
    /// assert_eq!(path.to_string(), "users[0].email");
    /// ```
    pub fn from_pointer(pointer: &str, instance: &Value) -> Self {
        let mut segments = Vec::new();
        if pointer.is_empty() {
            return Self { segments };
        }

        let mut current = Some(instance);
        for token in pointer.split('/').skip(1) {
            // Unescape order matters: ~1 first, then ~0 (RFC 6901 §4).
            let token = token.replace("~1", "/").replace("~0", "~");

            if let Some(Value::Array(items)) = current {
                if let Ok(idx) = token.parse::<usize>() {
                    current = items.get(idx);
                    segments.push(PathSegment::Index(idx));
                    continue;
                }
            }
            current = current.and_then(|v| v.get(token.as_str()));
            segments.push(PathSegment::Field(token));
        }
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

impl FromIterator<PathSegment> for JsonPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}
