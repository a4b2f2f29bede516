//! Scalar values stored in records.
//!
//! A [`Value`] is either a string or an integer. Values of the same kind
//! are totally ordered; values of different kinds have no ordering and
//! the engine reports a type mismatch instead of coercing one into the
//! other.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Runtime value of a record field.
///
/// Deserializes from a bare JSON string or integer:
///
/// ```
/// use pagewin::Value;
///
/// let v: Vec<Value> = serde_json::from_str(r#"["Oscorp", 42]"#).unwrap();
/// assert_eq!(v, vec![Value::from("Oscorp"), Value::from(42)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// String value.
    Str(String),
    /// Integer value.
    Int(i64),
}

/// The scalar type of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Str,
    Int,
}

impl ValueKind {
    /// Returns the display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Str => "string",
            ValueKind::Int => "int",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Str(_) => ValueKind::Str,
            Value::Int(_) => ValueKind::Int,
        }
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            Value::Int(_) => None,
        }
    }

    /// Extracts the integer value, if present.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Str(_) => None,
        }
    }

    /// Compares two values of the same kind.
    ///
    /// Strings compare lexicographically by bytes, integers numerically.
    /// Returns `None` when the kinds differ.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_and_extractors() {
        assert_eq!(Value::from("a").kind(), ValueKind::Str);
        assert_eq!(Value::from(1).kind(), ValueKind::Int);

        assert_eq!(Value::from("hello").as_str(), Some("hello"));
        assert_eq!(Value::from("hello").as_int(), None);
        assert_eq!(Value::from(42).as_int(), Some(42));
        assert_eq!(Value::from(42).as_str(), None);
    }

    #[test]
    fn compare_same_kind() {
        assert_eq!(
            Value::from("apple").compare(&Value::from("banana")),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::from(20).compare(&Value::from(19)),
            Some(Ordering::Greater)
        );
        assert_eq!(Value::from(7).compare(&Value::from(7)), Some(Ordering::Equal));
    }

    #[test]
    fn compare_is_numeric_not_textual() {
        // "9" > "10" as text, 9 < 10 as numbers
        assert_eq!(Value::from(9).compare(&Value::from(10)), Some(Ordering::Less));
        assert_eq!(
            Value::from("9").compare(&Value::from("10")),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn compare_is_case_sensitive() {
        assert_eq!(
            Value::from("Zed").compare(&Value::from("apple")),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn compare_mixed_kinds() {
        assert_eq!(Value::from("1").compare(&Value::from(1)), None);
        assert_eq!(Value::from(1).compare(&Value::from("1")), None);
    }

    #[test]
    fn display() {
        assert_eq!(Value::from("x").to_string(), "x");
        assert_eq!(Value::from(-4).to_string(), "-4");
        assert_eq!(ValueKind::Int.to_string(), "int");
    }

    #[test]
    fn deserialize_untagged() {
        let v: Value = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(v, Value::Str("abc".into()));
        let v: Value = serde_json::from_str("12").unwrap();
        assert_eq!(v, Value::Int(12));
        assert!(serde_json::from_str::<Value>("1.5").is_err());
    }
}
