//! Item Form Component
//!
//! Entry form for new items: name plus category.

use leptos::prelude::*;

use crate::models::{Item, CATEGORIES};

/// Form for creating new items. Hands a complete item to `on_add_item`.
#[component]
pub fn ItemForm(#[prop(into)] on_add_item: Callback<Item>) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(CATEGORIES[0].to_string());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = name.get();
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        on_add_item.run(Item::with_client_id(text, category.get()));
        set_name.set(String::new());
    };

    view! {
        <form class="new-item-form" on:submit=submit>
            <label>
                "Name:"
                <input
                    type="text"
                    name="name"
                    placeholder="Add new item..."
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>

            <label>
                "Category:"
                <select
                    name="category"
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                >
                    {CATEGORIES.iter().map(|value| {
                        let is_selected = move || category.get() == *value;
                        view! {
                            <option value=*value selected=is_selected>{*value}</option>
                        }
                    }).collect_view()}
                </select>
            </label>

            <button type="submit">"Add to List"</button>
        </form>
    }
}
