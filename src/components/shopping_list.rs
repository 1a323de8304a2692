//! Shopping List Component
//!
//! Owns the item store. Every mutation is applied locally first, then
//! mirrored to the server in the background; server failures are only
//! logged and never roll the local change back.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{CategoryFilter, ItemForm, ItemRow};
use crate::context::AppContext;
use crate::models::Item;
use crate::store::{
    keyed_rows, store_add_item, store_remove_item, store_select_category, store_selected_category,
    store_update_item, store_visible_items, ShoppingState,
};
use crate::sync::{self, HttpRemote};

#[component]
pub fn ShoppingList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let store = Store::new(ShoppingState::default());
    let remote = StoredValue::new_local(HttpRemote::new(&ctx.config));

    // Hydrate once on mount
    Effect::new(move |_| {
        let remote = remote.get_value();
        spawn_local(async move { sync::hydrate_store(&remote, &store).await });
    });

    let on_add_item = Callback::new(move |item: Item| {
        store_add_item(&store, item.clone());
        let remote = remote.get_value();
        spawn_local(async move { sync::mirror_add(&remote, &item).await });
    });

    let on_update_item = Callback::new(move |item: Item| {
        store_update_item(&store, item.clone());
        let remote = remote.get_value();
        spawn_local(async move { sync::mirror_update(&remote, &item).await });
    });

    let on_delete_item = Callback::new(move |item: Item| {
        store_remove_item(&store, &item);
        let remote = remote.get_value();
        spawn_local(async move { sync::mirror_delete(&remote, &item).await });
    });

    let on_category_change = Callback::new(move |category: String| {
        store_select_category(&store, category);
    });

    let selected = Signal::derive(move || store_selected_category(&store));

    let rows = move || keyed_rows(store_visible_items(&store));

    view! {
        <div class="shopping-list">
            <ItemForm on_add_item=on_add_item />
            <CategoryFilter category=selected on_category_change=on_category_change />
            <ul class="items">
                <For
                    each=rows
                    key=|(key, _)| key.clone()
                    children=move |(_, item)| view! {
                        <ItemRow
                            item=item
                            on_update_item=on_update_item
                            on_delete_item=on_delete_item
                        />
                    }
                />
            </ul>
        </div>
    }
}
