//! Category Filter
//!
//! Derives the displayed subset of the store from the current selection.

use crate::models::{Item, ALL_CATEGORIES};

/// Whether the selection is the "no filter" sentinel
pub fn is_all(selection: &str) -> bool {
    selection == ALL_CATEGORIES
}

/// Items whose category equals `selection`, in store order.
/// Returns every item when `selection` is "All".
pub fn filter_by_category(items: &[Item], selection: &str) -> Vec<Item> {
    items
        .iter()
        .filter(|item| is_all(selection) || item.category == selection)
        .cloned()
        .collect()
}
