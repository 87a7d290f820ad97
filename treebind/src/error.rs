//! Error types for the binding pass.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Convenience alias for binding results.
pub type BindResult<T> = Result<T, BindError>;

/// Errors that can occur while binding a tree onto a struct.
///
/// The first error aborts the whole call; nested sections propagate their
/// errors verbatim, with the binding key in the message as the diagnostic
/// anchor.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BindError {
    /// A field without `nilable` or `external` had no entry in the tree.
    #[error("the key `{key}` is required but absent from the input tree")]
    MissingKey {
        /// Binding key that was consulted.
        key: String,
    },

    /// A nested section's key held something other than a mapping.
    #[error("the key `{key}` holds {kind} where a nested mapping was expected")]
    NotAMap {
        /// Binding key that was consulted.
        key: String,
        /// Shape of the value actually found there.
        kind: ValueKind,
    },
}

/// The shape of a tree value, reported by [`BindError::NotAMap`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueKind {
    /// An explicit null.
    Null,
    /// A boolean.
    Bool,
    /// An integer or float.
    Number,
    /// A string.
    String,
    /// An ordered list.
    Array,
    /// A string-keyed mapping.
    Object,
}

impl ValueKind {
    /// Classify a tree value.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Null => "null",
            Self::Bool => "a boolean",
            Self::Number => "a number",
            Self::String => "a string",
            Self::Array => "an array",
            Self::Object => "an object",
        };
        f.write_str(text)
    }
}
