//! Untyped records.
//!
//! A [`Record`] maps field names to scalar [`Value`]s. Records are owned by
//! the caller; the engine only ever borrows them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PageError, Result};
use crate::value::{Value, ValueKind};

/// A mapping from field name to scalar value.
///
/// # Example
///
/// ```
/// use pagewin::Record;
///
/// let record = Record::new()
///     .with("name", "Peter Parker")
///     .with("age", 20);
///
/// assert_eq!(record.require_str("name").unwrap(), "Peter Parker");
/// assert_eq!(record.require_int("age").unwrap(), 20);
/// assert!(record.require("occupation").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Record::default()
    }

    /// Adds a field, returning the record.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Sets a field, returning the previous value if any.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the value of a field or a `MissingField` error.
    pub fn require(&self, field: &str) -> Result<&Value> {
        self.get(field).ok_or_else(|| PageError::missing(field))
    }

    /// Returns a string field.
    ///
    /// Fails with `MissingField` if absent and `TypeMismatch` if the value
    /// is not a string.
    pub fn require_str(&self, field: &str) -> Result<&str> {
        let value = self.require(field)?;
        value
            .as_str()
            .ok_or_else(|| mismatch(field, ValueKind::Str, value))
    }

    /// Returns an integer field.
    ///
    /// Fails with `MissingField` if absent and `TypeMismatch` if the value
    /// is not an integer.
    pub fn require_int(&self, field: &str) -> Result<i64> {
        let value = self.require(field)?;
        value
            .as_int()
            .ok_or_else(|| mismatch(field, ValueKind::Int, value))
    }

    /// Returns `true` if the record has the field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

pub(crate) fn mismatch(field: &str, expected: ValueKind, actual: &Value) -> PageError {
    PageError::TypeMismatch {
        field: field.to_string(),
        expected: expected.as_str(),
        actual: actual.kind().as_str(),
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}
