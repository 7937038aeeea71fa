//! Error types for path operations.

use thiserror::Error;

/// Structured error types for path-addressed reads and writes.
///
/// A path that simply does not exist is never an error: reads return
/// `Option` and removals of missing paths succeed.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    /// The path string cannot address anything (empty)
    #[error("Invalid pattern: '{pattern}'")]
    InvalidPattern { pattern: String },

    /// A value could not be converted to or from a node
    #[error("Type conversion failed: {reason}")]
    TypeConversion { reason: String },

    /// A numeric segment exceeds the addressable or allowed index range
    #[error("Index overflow: segment '{segment}' exceeds limit {limit}")]
    IndexOverflow { segment: String, limit: usize },

    /// Append targeted an existing node that is not a sequence
    #[error("Cannot append to '{pattern}': found {found}, expected sequence")]
    NotAppendable { pattern: String, found: String },
}

impl PathError {
    /// Check if the path itself was rejected
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self, PathError::InvalidPattern { .. })
    }

    /// Check if this error is a value conversion failure
    pub fn is_type_conversion(&self) -> bool {
        matches!(self, PathError::TypeConversion { .. })
    }

    /// Check if this error is an index range failure
    pub fn is_index_overflow(&self) -> bool {
        matches!(self, PathError::IndexOverflow { .. })
    }

    /// Check if this error is a rejected append
    pub fn is_not_appendable(&self) -> bool {
        matches!(self, PathError::NotAppendable { .. })
    }

    /// Get the offending pattern, when the error carries one
    pub fn pattern(&self) -> Option<&str> {
        match self {
            PathError::InvalidPattern { pattern } | PathError::NotAppendable { pattern, .. } => {
                Some(pattern)
            }
            _ => None,
        }
    }
}

impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}
