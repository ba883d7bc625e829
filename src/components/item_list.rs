//! Item List Component
//!
//! Renders the rows derived from the current state.

use leptos::prelude::*;

use crate::components::ListItem;
use crate::context::use_app_context;
use crate::render;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_app_context();

    let rows = move || ctx.state.with(render::rows);

    view! {
        <ul id="item-list" class="items">
            <For
                each=rows
                key=|row| (row.index, row.text.clone(), row.editing, row.visible)
                children=move |row| view! { <ListItem row=row /> }
            />
        </ul>
    }
}
