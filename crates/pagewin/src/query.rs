//! Query parameters.
//!
//! [`PageQuery`] is a fluent builder for one pagination request. Limit and
//! offset are stored exactly as the caller supplied them; the engine
//! validates them.

use crate::filter::FilterSet;

/// Parameters for one pagination window.
///
/// # Example
///
/// ```
/// use pagewin::PageQuery;
///
/// let query = PageQuery::new("name")
///     .filter("occupation", "Oscorp")
///     .limit(10)
///     .offset(0);
///
/// assert_eq!(query.order_by(), "name");
/// assert_eq!(query.get_limit(), Some(10));
/// assert_eq!(query.filters().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    order_by: String,
    limit: Option<i64>,
    offset: i64,
    filters: FilterSet,
}

impl PageQuery {
    /// Creates a query ordered by `order_by`, with no limit, offset 0 and
    /// no filters.
    pub fn new(order_by: impl Into<String>) -> Self {
        PageQuery {
            order_by: order_by.into(),
            limit: None,
            offset: 0,
            filters: FilterSet::new(),
        }
    }

    /// Sets the maximum number of items in the window.
    pub fn limit(mut self, n: i64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Sets or clears the limit.
    pub fn maybe_limit(mut self, n: Option<i64>) -> Self {
        self.limit = n;
        self
    }

    /// Sets the zero-based start of the window.
    pub fn offset(mut self, n: i64) -> Self {
        self.offset = n;
        self
    }

    /// Adds a substring filter.
    pub fn filter(mut self, field: impl Into<String>, needle: impl Into<String>) -> Self {
        self.filters.insert(field, needle);
        self
    }

    /// Adds a substring filter when `needle` is present and non-empty.
    pub fn filter_opt(self, field: impl Into<String>, needle: Option<&str>) -> Self {
        match needle {
            Some(n) if !n.is_empty() => self.filter(field, n),
            _ => self,
        }
    }

    /// The field the window is ordered by.
    pub fn order_by(&self) -> &str {
        &self.order_by
    }

    /// The requested limit, unvalidated.
    pub fn get_limit(&self) -> Option<i64> {
        self.limit
    }

    /// The requested offset, unvalidated.
    pub fn get_offset(&self) -> i64 {
        self.offset
    }

    /// The substring filters of this query.
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let q = PageQuery::new("age");
        assert_eq!(q.order_by(), "age");
        assert_eq!(q.get_limit(), None);
        assert_eq!(q.get_offset(), 0);
        assert!(q.filters().is_empty());
    }

    #[test]
    fn filters_are_not_shared_between_queries() {
        let a = PageQuery::new("age").filter("name", "Peter");
        let b = PageQuery::new("age");
        assert_eq!(a.filters().len(), 1);
        assert!(b.filters().is_empty());
    }

    #[test]
    fn filter_opt_skips_empty() {
        let q = PageQuery::new("age")
            .filter_opt("name", None)
            .filter_opt("occupation", Some(""))
            .filter_opt("name", Some("Eddie"));
        assert_eq!(q.filters().iter().collect::<Vec<_>>(), vec![("name", "Eddie")]);
    }

    #[test]
    fn raw_values_are_kept() {
        let q = PageQuery::new("age").limit(-5).offset(-1);
        assert_eq!(q.get_limit(), Some(-5));
        assert_eq!(q.get_offset(), -1);
        assert_eq!(q.maybe_limit(None).get_limit(), None);
    }
}
