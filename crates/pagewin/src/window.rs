//! The pagination result.

use serde::Serialize;

/// One window of typed items plus the size of the filtered population.
///
/// Serializes as `{"items": [...], "totalItemsCount": n}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow<T> {
    /// Items in this window, in sorted order.
    pub items: Vec<T>,
    /// Number of records that passed filtering, before slicing.
    pub total_items_count: usize,
}

impl<T> PageWindow<T> {
    /// Empty window over an empty population.
    pub fn empty() -> Self {
        PageWindow {
            items: Vec::new(),
            total_items_count: 0,
        }
    }

    /// Number of items in this window.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the window holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
