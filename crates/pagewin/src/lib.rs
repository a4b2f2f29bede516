//! Pagewin - offset/limit pagination windows over in-memory records.
//!
//! Given a collection of untyped [`Record`]s, pagewin returns one page of
//! typed items ordered by a single key, narrowed by substring filters, and
//! the total number of records that passed the filters.
//!
//! - Values are strings or integers, compared lexicographically or
//!   numerically
//! - Filters are case-sensitive substring tests, all of which must hold
//! - Ordering is ascending and stable on one field
//! - Windows are an offset plus an optional, policy-bounded limit
//!
//! # Quick Start
//!
//! ```rust
//! use pagewin::{paginate, PageQuery, Projection, Record, Result};
//!
//! struct User {
//!     name: String,
//!     age: i64,
//! }
//!
//! impl Projection for User {
//!     const FIELDS: &'static [&'static str] = &["name", "age"];
//!
//!     fn project(record: &Record) -> Result<Self> {
//!         Ok(User {
//!             name: record.require_str("name")?.to_string(),
//!             age: record.require_int("age")?,
//!         })
//!     }
//! }
//!
//! let users = vec![
//!     Record::new().with("name", "Norman Osborn").with("age", 42),
//!     Record::new().with("name", "Peter Parker").with("age", 20),
//!     Record::new().with("name", "Harold Osborn").with("age", 19),
//! ];
//!
//! let query = PageQuery::new("age").filter("name", "Osborn").limit(1);
//! let window = paginate::<User>(&users, &query).unwrap();
//!
//! assert_eq!(window.total_items_count, 2);
//! assert_eq!(window.items[0].name, "Harold Osborn");
//! ```
//!
//! # Window Semantics
//!
//! ```text
//! matched = records where every filter needle ⊂ record[field]
//! sorted  = stable_sort(matched, by = record[order_by])
//! items   = sorted[offset .. offset + limit]
//! total   = len(matched)
//! ```
//!
//! A non-zero offset must be below `total`. Offset 0 is always accepted,
//! so an empty result is a valid, empty window.

mod error;
mod filter;
mod ordering;
mod paginate;
mod policy;
mod project;
mod query;
mod record;
mod value;
mod window;

// Re-export public API
pub use error::{ErrorKind, PageError, Result};
pub use filter::FilterSet;
pub use ordering::{check_key, is_sorted_by_key, sort_by_key};
pub use paginate::{paginate, Paginator};
pub use policy::{LimitPolicy, DEFAULT_MAX_LIMIT};
pub use project::{project, project_all, Projection};
pub use query::PageQuery;
pub use record::Record;
pub use value::{Value, ValueKind};
pub use window::PageWindow;
