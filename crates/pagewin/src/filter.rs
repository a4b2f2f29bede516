//! Substring filters.
//!
//! A [`FilterSet`] holds `(field, needle)` pairs. A record passes when, for
//! every pair, the needle occurs inside the record's string value at that
//! field. Matching is case-sensitive containment, not equality.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::record::{mismatch, Record};
use crate::value::{Value, ValueKind};

/// Conjunctive set of substring predicates.
///
/// An empty set matches every record. Each query gets its own set.
///
/// # Example
///
/// ```
/// use pagewin::{FilterSet, Record};
///
/// let filters = FilterSet::new().with("occupation", "Oscorp");
/// let norman = Record::new().with("occupation", "Founder, Oscorp Industries");
/// let peter = Record::new().with("occupation", "Photographer");
///
/// assert!(filters.matches(&norman).unwrap());
/// assert!(!filters.matches(&peter).unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    conditions: BTreeMap<String, String>,
}

impl FilterSet {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        FilterSet::default()
    }

    /// Adds a condition, returning the set.
    ///
    /// A second condition on the same field replaces the first.
    pub fn with(mut self, field: impl Into<String>, needle: impl Into<String>) -> Self {
        self.insert(field, needle);
        self
    }

    /// Adds a condition.
    pub fn insert(&mut self, field: impl Into<String>, needle: impl Into<String>) {
        self.conditions.insert(field.into(), needle.into());
    }

    /// Returns `true` if there are no conditions.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Number of conditions.
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Iterates over `(field, needle)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.conditions
            .iter()
            .map(|(f, n)| (f.as_str(), n.as_str()))
    }

    /// Tests whether a record satisfies every condition.
    ///
    /// A filtered field that is missing from the record, or that does not
    /// hold a string, is an error rather than a non-match.
    pub fn matches(&self, record: &Record) -> Result<bool> {
        for (field, needle) in &self.conditions {
            match record.require(field)? {
                Value::Str(s) => {
                    if !s.contains(needle.as_str()) {
                        log::trace!("filter {field}~{needle:?} rejected {s:?}");
                        return Ok(false);
                    }
                }
                other => return Err(mismatch(field, ValueKind::Str, other)),
            }
        }
        Ok(true)
    }
}

impl<K, V> FromIterator<(K, V)> for FilterSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = FilterSet::new();
        for (field, needle) in iter {
            set.insert(field, needle);
        }
        set
    }
}
