//! List Item Component
//!
//! A single `<li>`: body click selects it for editing, the × button removes it.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::render::ItemRow;

#[component]
pub fn ListItem(row: ItemRow) -> impl IntoView {
    let ctx = use_app_context();

    let index = row.index;
    let class = row.class();
    let display = if row.visible { "flex" } else { "none" };
    let text = row.text;

    view! {
        <li
            class=class
            style:display=display
            on:click=move |_| ctx.select(index)
        >
            {text}
            // Delete button; must not bubble into the body click
            <button
                class="remove-item btn-link text-red"
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.stop_propagation();
                    ctx.remove(index);
                }
            >
                "×"
            </button>
        </li>
    }
}
