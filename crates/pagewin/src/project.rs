//! Record projection.
//!
//! This module provides the [`Projection`] trait, which turns an untyped
//! [`Record`] into a typed output item through an explicit field mapping.

use crate::error::Result;
use crate::record::Record;

/// Trait for typed items built from records.
///
/// Implementors enumerate the fields of their shape in [`FIELDS`] and read
/// each one with [`Record::require_str`] / [`Record::require_int`], so a
/// missing or mistyped field surfaces as an error at projection time.
///
/// # Example
///
/// ```
/// use pagewin::{Projection, Record, Result};
///
/// struct Hero {
///     name: String,
///     age: i64,
/// }
///
/// impl Projection for Hero {
///     const FIELDS: &'static [&'static str] = &["name", "age"];
///
///     fn project(record: &Record) -> Result<Self> {
///         Ok(Hero {
///             name: record.require_str("name")?.to_string(),
///             age: record.require_int("age")?,
///         })
///     }
/// }
///
/// let hero = Hero::project(&Record::new().with("name", "Peter").with("age", 20)).unwrap();
/// assert_eq!(hero.age, 20);
/// assert!(Hero::has_field("age"));
/// assert!(!Hero::has_field("id"));
/// ```
///
/// [`FIELDS`]: Projection::FIELDS
pub trait Projection: Sized {
    /// Names of the fields of this shape. Valid order keys.
    const FIELDS: &'static [&'static str];

    /// Builds an item from a record.
    fn project(record: &Record) -> Result<Self>;

    /// Returns `true` if `field` is part of this shape.
    fn has_field(field: &str) -> bool {
        Self::FIELDS.contains(&field)
    }
}

/// Projects a record into `T`.
pub fn project<T: Projection>(record: &Record) -> Result<T> {
    T::project(record)
}

/// Projects every record, stopping at the first failure.
pub fn project_all<'a, T, I>(records: I) -> Result<Vec<T>>
where
    T: Projection,
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().map(T::project).collect()
}

/// Raw records project to themselves; every field name is accepted.
impl Projection for Record {
    const FIELDS: &'static [&'static str] = &[];

    fn project(record: &Record) -> Result<Self> {
        Ok(record.clone())
    }

    fn has_field(_field: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PageError;

    #[derive(Debug, PartialEq)]
    struct Item {
        name: String,
        count: i64,
    }

    impl Projection for Item {
        const FIELDS: &'static [&'static str] = &["name", "count"];

        fn project(record: &Record) -> Result<Self> {
            Ok(Item {
                name: record.require_str("name")?.to_string(),
                count: record.require_int("count")?,
            })
        }
    }

    #[test]
    fn projects_declared_fields_only() {
        let r = Record::new()
            .with("name", "test")
            .with("count", 42)
            .with("extra", "ignored");
        assert_eq!(
            project::<Item>(&r).unwrap(),
            Item {
                name: "test".into(),
                count: 42
            }
        );
    }

    #[test]
    fn missing_field() {
        let r = Record::new().with("name", "test");
        assert_eq!(
            Item::project(&r).unwrap_err(),
            PageError::MissingField {
                field: "count".into()
            }
        );
    }

    #[test]
    fn wrong_type() {
        let r = Record::new().with("name", 1).with("count", 1);
        assert!(matches!(
            Item::project(&r).unwrap_err(),
            PageError::TypeMismatch { .. }
        ));
    }

    #[test]
    fn project_all_stops_on_error() {
        let good = Record::new().with("name", "a").with("count", 1);
        let bad = Record::new().with("name", "b");
        assert_eq!(project_all::<Item, _>([&good]).unwrap().len(), 1);
        assert!(project_all::<Item, _>([&good, &bad]).is_err());
    }

    #[test]
    fn record_is_its_own_projection() {
        let r = Record::new().with("anything", 1);
        assert_eq!(Record::project(&r).unwrap(), r);
        assert!(Record::has_field("whatever"));
    }
}
