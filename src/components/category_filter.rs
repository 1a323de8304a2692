//! Category Filter Component
//!
//! Selector for the active category; "All" shows everything.

use leptos::prelude::*;

use crate::models::{ALL_CATEGORIES, CATEGORIES};

/// Filter options, sentinel first
fn filter_options() -> impl Iterator<Item = &'static str> {
    std::iter::once(ALL_CATEGORIES).chain(CATEGORIES.iter().copied())
}

#[component]
pub fn CategoryFilter(
    #[prop(into)] category: Signal<String>,
    #[prop(into)] on_category_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="filter">
            <select
                name="filter"
                on:change=move |ev| on_category_change.run(event_target_value(&ev))
            >
                {filter_options().map(|value| {
                    let is_selected = move || category.get() == value;
                    view! {
                        <option value=value selected=is_selected>{value}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
