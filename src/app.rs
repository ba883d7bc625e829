//! Shopping List App
//!
//! Root component: form, filter, list and clear button in one column.

use leptos::prelude::*;

use crate::browser::{BrowserDialogs, BrowserListManager, WebStorage};
use crate::components::{ClearButton, FilterInput, ItemForm, ItemList};
use crate::config::ListConfig;
use crate::context::AppContext;
use crate::render;

#[component]
pub fn App(config: ListConfig) -> impl IntoView {
    let manager = BrowserListManager::new(WebStorage, BrowserDialogs, &config);

    // Load-on-start happens here, before the first render
    let ctx = AppContext::new(manager);
    provide_context(ctx);

    let chrome = move || ctx.state.with(render::chrome);
    let has_items = move || chrome().item_count > 0;

    view! {
        <div class="container">
            <header>
                <h1>"Shopping List"</h1>
            </header>

            <ItemForm />

            <FilterInput />

            <ItemList />

            <Show when=has_items>
                <p class="item-count">{move || render::count_label(chrome().item_count)}</p>
            </Show>

            <ClearButton />
        </div>
    }
}
