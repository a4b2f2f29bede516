//! The pagination engine.
//!
//! [`Paginator::paginate`] filters, sorts, validates the offset, slices and
//! projects, in that order. The dataset is only borrowed: filtering and
//! sorting operate on a private vector of references.

use crate::error::{PageError, Result};
use crate::ordering::sort_by_key;
use crate::policy::LimitPolicy;
use crate::project::{project_all, Projection};
use crate::query::PageQuery;
use crate::record::Record;
use crate::window::PageWindow;

/// Computes pagination windows under a [`LimitPolicy`].
///
/// # Example
///
/// ```
/// use pagewin::{PageQuery, Paginator, LimitPolicy, Record};
///
/// let data = vec![
///     Record::new().with("name", "b").with("age", 2),
///     Record::new().with("name", "a").with("age", 1),
/// ];
///
/// let paginator = Paginator::new(LimitPolicy::with_max(10));
/// let window = paginator
///     .paginate::<Record>(&data, &PageQuery::new("age").limit(1))
///     .unwrap();
///
/// assert_eq!(window.total_items_count, 2);
/// assert_eq!(window.items[0].require_str("name").unwrap(), "a");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paginator {
    policy: LimitPolicy,
}

impl Paginator {
    /// Creates a paginator that enforces `policy`.
    pub fn new(policy: LimitPolicy) -> Self {
        Paginator { policy }
    }

    /// Returns the limit policy in force.
    pub fn policy(&self) -> &LimitPolicy {
        &self.policy
    }

    /// Returns one window of `dataset` as typed items.
    ///
    /// # Errors
    ///
    /// - `InvalidLimit` if the limit is below 1 or above the policy bound.
    /// - `NegativeOffset` if the offset is below 0.
    /// - `UnknownField` if the order key is not one of `T::FIELDS`.
    /// - `MissingField` / `TypeMismatch` if a filtered record lacks a
    ///   filter field or the order key, holds mixed key kinds, or cannot be
    ///   projected.
    /// - `OffsetOutOfRange` if the offset is non-zero and not below the
    ///   filtered count. Offset 0 is always accepted, even when nothing
    ///   matches.
    pub fn paginate<T: Projection>(
        &self,
        dataset: &[Record],
        query: &PageQuery,
    ) -> Result<PageWindow<T>> {
        let limit = query
            .get_limit()
            .map(|limit| self.policy.check(limit))
            .transpose()?;

        let offset = query.get_offset();
        if offset < 0 {
            return Err(PageError::NegativeOffset { offset });
        }

        let order_by = query.order_by();
        if !T::has_field(order_by) {
            return Err(PageError::UnknownField {
                field: order_by.to_string(),
            });
        }

        let filters = query.filters();
        let mut matched: Vec<&Record> = Vec::with_capacity(dataset.len());
        for record in dataset {
            if filters.matches(record)? {
                matched.push(record);
            }
        }

        sort_by_key(&mut matched, order_by)?;

        let total = matched.len();
        let start = offset as usize;
        if start != 0 && start >= total {
            return Err(PageError::OffsetOutOfRange {
                offset,
                count: total,
            });
        }

        let end = match limit {
            Some(limit) => start.saturating_add(limit).min(total),
            None => total,
        };
        let items = project_all(matched[start..end].iter().copied())?;

        log::debug!(
            "paginate order_by={order_by} limit={limit:?} offset={offset} filters={} matched={total} window={}",
            filters.len(),
            end - start,
        );

        Ok(PageWindow {
            items,
            total_items_count: total,
        })
    }
}

/// Computes a window with the default [`LimitPolicy`].
pub fn paginate<T: Projection>(dataset: &[Record], query: &PageQuery) -> Result<PageWindow<T>> {
    Paginator::default().paginate(dataset, query)
}
