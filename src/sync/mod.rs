//! Remote Sync
//!
//! Mirrors store mutations to the `/items` collection. The store is
//! updated before any of these run; failures are logged here and go
//! no further.

mod http;

use async_trait::async_trait;

use crate::error::{SyncError, SyncResult};
use crate::models::Item;
use crate::store::{store_set_items, ShoppingStore};

pub use http::HttpRemote;

/// The item collection as seen from the client
#[async_trait(?Send)]
pub trait ItemsRemote {
    /// `GET /items`
    async fn list(&self) -> SyncResult<Vec<Item>>;
    /// `POST /items`
    async fn create(&self, item: &Item) -> SyncResult<()>;
    /// `PUT /items/{id}`
    async fn replace(&self, item: &Item) -> SyncResult<()>;
    /// `DELETE /items/{id}`
    async fn remove(&self, item: &Item) -> SyncResult<()>;
}

fn report(action: &str, err: SyncError) {
    match err {
        SyncError::MissingId { .. } => log::warn!("[SYNC] Skipped {}: {}", action, err),
        _ => log::error!("[SYNC] Error {}: {}", action, err),
    }
}

/// Initial fetch. `None` on any failure; the caller keeps its empty list.
pub async fn hydrate<R: ItemsRemote + ?Sized>(remote: &R) -> Option<Vec<Item>> {
    match remote.list().await {
        Ok(items) => {
            log::info!("[SYNC] Loaded {} items", items.len());
            Some(items)
        }
        Err(err) => {
            report("fetching items", err);
            None
        }
    }
}

/// Initial fetch straight into the store. On failure the store is left untouched.
pub async fn hydrate_store<R: ItemsRemote + ?Sized>(remote: &R, store: &ShoppingStore) {
    if let Some(items) = hydrate(remote).await {
        store_set_items(store, items);
    }
}

pub async fn mirror_add<R: ItemsRemote + ?Sized>(remote: &R, item: &Item) {
    if let Err(err) = remote.create(item).await {
        report("adding item", err);
    }
}

pub async fn mirror_update<R: ItemsRemote + ?Sized>(remote: &R, item: &Item) {
    if let Err(err) = remote.replace(item).await {
        report("updating item", err);
    }
}

pub async fn mirror_delete<R: ItemsRemote + ?Sized>(remote: &R, item: &Item) {
    if let Err(err) = remote.remove(item).await {
        report("deleting item", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;
    use crate::store::{push_item, store_visible_items, ShoppingState};
    use leptos::prelude::Owner;
    use reactive_stores::Store;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Create(Item),
        Replace(Item),
        Remove(Item),
    }

    /// Records every call; answers with HTTP 500 when `failing`
    #[derive(Default)]
    struct RecordingRemote {
        calls: RefCell<Vec<Call>>,
        listed: Vec<Item>,
        failing: bool,
    }

    impl RecordingRemote {
        fn failing() -> Self {
            Self {
                failing: true,
                ..Default::default()
            }
        }

        fn outcome(&self, method: &'static str) -> SyncResult<()> {
            if self.failing {
                Err(SyncError::Status {
                    method,
                    url: "http://test/items".to_string(),
                    status: 500,
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl ItemsRemote for RecordingRemote {
        async fn list(&self) -> SyncResult<Vec<Item>> {
            self.calls.borrow_mut().push(Call::List);
            self.outcome("GET").map(|_| self.listed.clone())
        }

        async fn create(&self, item: &Item) -> SyncResult<()> {
            self.calls.borrow_mut().push(Call::Create(item.clone()));
            self.outcome("POST")
        }

        async fn replace(&self, item: &Item) -> SyncResult<()> {
            self.calls.borrow_mut().push(Call::Replace(item.clone()));
            self.outcome("PUT")
        }

        async fn remove(&self, item: &Item) -> SyncResult<()> {
            self.calls.borrow_mut().push(Call::Remove(item.clone()));
            self.outcome("DELETE")
        }
    }

    fn make_item(id: i64, name: &str, category: &str) -> Item {
        Item {
            id: Some(ItemId::Number(id)),
            ..Item::new(name, category)
        }
    }

    #[test]
    fn test_hydrate_returns_listed_items() {
        let remote = RecordingRemote {
            listed: vec![make_item(1, "Milk", "Dairy")],
            ..Default::default()
        };
        let items = block_on(hydrate(&remote));
        assert_eq!(items, Some(vec![make_item(1, "Milk", "Dairy")]));
        assert_eq!(*remote.calls.borrow(), vec![Call::List]);
    }

    #[test]
    fn test_hydrate_failure_yields_none() {
        let remote = RecordingRemote::failing();
        assert_eq!(block_on(hydrate(&remote)), None);
    }

    #[test]
    fn test_failed_add_keeps_local_item() {
        let mut items = vec![make_item(1, "Milk", "Dairy"), make_item(2, "Bread", "Bakery")];
        let eggs = make_item(3, "Eggs", "Dairy");
        let remote = RecordingRemote::failing();

        push_item(&mut items, eggs.clone());
        block_on(mirror_add(&remote, &eggs));

        assert_eq!(items.len(), 3);
        assert_eq!(items[2], eggs);
        let calls = remote.calls.borrow();
        assert_eq!(*calls, vec![Call::Create(eggs.clone())]);
        if let Call::Create(sent) = &calls[0] {
            assert_eq!(
                serde_json::to_value(sent).unwrap(),
                json!({"id": 3, "name": "Eggs", "category": "Dairy"})
            );
        }
    }

    #[test]
    fn test_update_and_delete_are_forwarded() {
        let remote = RecordingRemote::default();
        let bread = make_item(2, "Bread", "Dairy");

        block_on(mirror_update(&remote, &bread));
        block_on(mirror_delete(&remote, &bread));

        assert_eq!(
            *remote.calls.borrow(),
            vec![Call::Replace(bread.clone()), Call::Remove(bread)]
        );
    }

    #[test]
    fn test_failures_do_not_propagate() {
        let remote = RecordingRemote::failing();
        let item = make_item(7, "Apples", "Produce");

        // All complete without panicking or returning an error
        block_on(mirror_add(&remote, &item));
        block_on(mirror_update(&remote, &item));
        block_on(mirror_delete(&remote, &item));
        assert_eq!(remote.calls.borrow().len(), 3);
    }

    #[test]
    fn test_hydrate_store_fills_or_leaves_empty() {
        Owner::new().with(|| {
            let store = Store::new(ShoppingState::default());
            block_on(hydrate_store(&RecordingRemote::failing(), &store));
            assert!(store_visible_items(&store).is_empty());

            let remote = RecordingRemote {
                listed: vec![make_item(1, "Milk", "Dairy"), make_item(2, "Bread", "Bakery")],
                ..Default::default()
            };
            block_on(hydrate_store(&remote, &store));
            assert_eq!(store_visible_items(&store).len(), 2);
        });
    }
}
