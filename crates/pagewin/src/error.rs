//! Error types for the pagewin crate.

use thiserror::Error;

/// Errors that can occur when computing a pagination window.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// Limit is zero, negative, or above the policy maximum.
    #[error("limit ({limit}) must be {}", limit_range(.max))]
    InvalidLimit { limit: i64, max: Option<usize> },

    /// Offset is below zero.
    #[error("offset ({offset}) must not be negative")]
    NegativeOffset { offset: i64 },

    /// Offset points past the last filtered record.
    #[error("offset ({offset}) is out of range (0-{})", last_index(.count))]
    OffsetOutOfRange { offset: i64, count: usize },

    /// Order key is not a field of the output shape.
    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    /// A record lacks a field needed for filtering, ordering or projection.
    #[error("record has no field '{field}'")]
    MissingField { field: String },

    /// A record field holds a value of the wrong scalar type.
    #[error("type mismatch on field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

fn limit_range(max: &Option<usize>) -> String {
    match *max {
        Some(max) => format!("between 1-{max}"),
        None => "at least 1".to_string(),
    }
}

fn last_index(count: &usize) -> i64 {
    *count as i64 - 1
}

/// Coarse classification of a [`PageError`].
///
/// Serving layers map these onto their own error representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad limit, offset or order key. The request itself is wrong.
    InvalidArgument,
    /// The dataset lacks a field the query or output shape needs.
    MissingField,
    /// The dataset holds a value of the wrong type for the query.
    TypeMismatch,
}

impl PageError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PageError::InvalidLimit { .. }
            | PageError::NegativeOffset { .. }
            | PageError::OffsetOutOfRange { .. }
            | PageError::UnknownField { .. } => ErrorKind::InvalidArgument,
            PageError::MissingField { .. } => ErrorKind::MissingField,
            PageError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }

    /// Returns `true` if the request parameters were at fault.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    pub(crate) fn missing(field: &str) -> Self {
        PageError::MissingField {
            field: field.to_string(),
        }
    }
}

/// Result type for pagewin operations.
pub type Result<T> = std::result::Result<T, PageError>;
