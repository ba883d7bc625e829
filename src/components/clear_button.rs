//! Clear Button Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::render;

/// Removes every item; hidden while the list is empty
#[component]
pub fn ClearButton() -> impl IntoView {
    let ctx = use_app_context();

    let display = move || {
        if ctx.state.with(render::chrome).show_clear { "block" } else { "none" }
    };

    view! {
        <button
            id="clear"
            class="btn-clear"
            style:display=display
            on:click=move |_| ctx.clear_all()
        >
            "Clear All"
        </button>
    }
}
