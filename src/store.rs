//! Shopping List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The list operations are plain functions over `Vec<Item>` so the
//! store helpers stay thin.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::filter_by_category;
use crate::models::{Item, ItemId, ALL_CATEGORIES};

/// View state owned by the shopping list component
#[derive(Clone, Debug, Store)]
pub struct ShoppingState {
    /// Items in display order
    pub items: Vec<Item>,
    /// Active category filter ("All" = unfiltered)
    pub selected_category: String,
}

impl Default for ShoppingState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected_category: ALL_CATEGORIES.to_string(),
        }
    }
}

pub type ShoppingStore = Store<ShoppingState>;

// ========================
// List Operations
// ========================

/// Position of the first item whose id equals `id`. Items without an id never match.
fn position_of(items: &[Item], id: Option<&ItemId>) -> Option<usize> {
    let id = id?;
    items.iter().position(|item| item.id.as_ref() == Some(id))
}

/// Append, no uniqueness check
pub fn push_item(items: &mut Vec<Item>, item: Item) {
    items.push(item);
}

/// Replace the item with the same id in place. Returns false when nothing matched.
pub fn replace_item(items: &mut [Item], updated: Item) -> bool {
    match position_of(items, updated.id.as_ref()) {
        Some(idx) => {
            items[idx] = updated;
            true
        }
        None => false,
    }
}

/// Remove the first item with the same id. Returns false when nothing matched.
pub fn remove_item(items: &mut Vec<Item>, target: &Item) -> bool {
    match position_of(items, target.id.as_ref()) {
        Some(idx) => {
            items.remove(idx);
            true
        }
        None => false,
    }
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole list (hydration)
pub fn store_set_items(store: &ShoppingStore, items: Vec<Item>) {
    *store.items().write() = items;
}

pub fn store_add_item(store: &ShoppingStore, item: Item) {
    push_item(&mut store.items().write(), item);
}

pub fn store_update_item(store: &ShoppingStore, item: Item) {
    if !replace_item(&mut store.items().write(), item) {
        log::debug!("[STORE] update ignored: no item with matching id");
    }
}

pub fn store_remove_item(store: &ShoppingStore, item: &Item) {
    if !remove_item(&mut store.items().write(), item) {
        log::debug!("[STORE] delete ignored: no item with matching id");
    }
}

pub fn store_select_category(store: &ShoppingStore, category: String) {
    *store.selected_category().write() = category;
}

pub fn store_selected_category(store: &ShoppingStore) -> String {
    store.selected_category().read().clone()
}

/// Items to render: filter(items, selection), recomputed on every call
pub fn store_visible_items(store: &ShoppingStore) -> Vec<Item> {
    let selection = store.selected_category().read();
    filter_by_category(&store.items().read(), &selection)
}

/// Row keys for the rendered list: serialized content plus an occurrence
/// counter for exact duplicates. Keys never depend on position, so adding or
/// removing one row leaves the other rows in place.
pub fn keyed_rows(items: Vec<Item>) -> Vec<((String, usize), Item)> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    items
        .into_iter()
        .map(|item| {
            let content = serde_json::to_string(&item).unwrap_or_default();
            let count = seen.entry(content.clone()).or_default();
            let key = (content, *count);
            *count += 1;
            (key, item)
        })
        .collect()
}
