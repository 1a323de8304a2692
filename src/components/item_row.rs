//! Item Row Component
//!
//! One entry in the list: cart toggle, inline edit, delete.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::{Item, CATEGORIES};

/// A single item row. Edited items keep their original id.
#[component]
pub fn ItemRow(
    item: Item,
    #[prop(into)] on_update_item: Callback<Item>,
    #[prop(into)] on_delete_item: Callback<Item>,
) -> impl IntoView {
    let in_cart = item.in_cart();
    let (editing, set_editing) = signal(false);
    let (draft_name, set_draft_name) = signal(item.name.clone());
    let (draft_category, set_draft_category) = signal(item.category.clone());
    let item = StoredValue::new(item);

    let row_class = if in_cart { "in-cart" } else { "" };
    let (cart_class, cart_label) = if in_cart {
        ("remove", "Remove From Cart")
    } else {
        ("add", "Add to Cart")
    };

    let toggle_cart = move |_: leptos::ev::MouseEvent| {
        on_update_item.run(item.with_value(Item::toggle_cart));
    };

    let start_edit = move |_: leptos::ev::MouseEvent| {
        item.with_value(|i| {
            set_draft_name.set(i.name.clone());
            set_draft_category.set(i.category.clone());
        });
        set_editing.set(true);
    };

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = draft_name.get();
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let mut updated = item.get_value();
        updated.name = name.to_string();
        updated.category = draft_category.get();
        set_editing.set(false);
        on_update_item.run(updated);
    };

    let name = move || item.with_value(|i| i.name.clone());
    let category = move || item.with_value(|i| i.category.clone());

    view! {
        <li class=row_class>
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <span class="name">{name}</span>
                    <span class="category">{category}</span>
                    <button class=cart_class on:click=toggle_cart>{cart_label}</button>
                    <button class="edit" on:click=start_edit>"Edit"</button>
                    <DeleteConfirmButton
                        prompt=format!("Delete {}?", name())
                        on_confirm=Callback::new(move |_: ()| on_delete_item.run(item.get_value()))
                    />
                }
            >
                <form class="edit-item" on:submit=save>
                    <input
                        type="text"
                        prop:value=move || draft_name.get()
                        on:input=move |ev| set_draft_name.set(event_target_value(&ev))
                    />
                    <select on:change=move |ev| set_draft_category.set(event_target_value(&ev))>
                        {CATEGORIES.iter().map(|value| {
                            let is_selected = move || draft_category.get() == *value;
                            view! {
                                <option value=*value selected=is_selected>{*value}</option>
                            }
                        }).collect_view()}
                    </select>
                    <button type="submit">"Save"</button>
                    <button type="button" on:click=move |_| set_editing.set(false)>"Cancel"</button>
                </form>
            </Show>
        </li>
    }
}
