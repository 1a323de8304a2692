//! Shopping List Frontend App
//!
//! Root component: loads configuration and mounts the list.

use leptos::prelude::*;

use crate::components::ShoppingList;
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new(AppConfig::from_document()));

    view! {
        <div class="app">
            <header>
                <h2>"Shopping List"</h2>
            </header>
            <ShoppingList />
        </div>
    }
}
