//! Filter Input Component
//!
//! Live case-insensitive filter; hidden while the list is empty.

use leptos::prelude::*;

use crate::components::input_value;
use crate::context::use_app_context;
use crate::render;

#[component]
pub fn FilterInput() -> impl IntoView {
    let ctx = use_app_context();

    let display = move || {
        if ctx.state.with(render::chrome).show_filter { "block" } else { "none" }
    };

    view! {
        <div class="filter" style:display=display>
            <input
                type="text"
                class="form-input-filter"
                id="filter"
                placeholder="Filter Items"
                prop:value=move || ctx.state.with(|state| state.filter.clone())
                on:input=move |ev| {
                    if let Some(value) = input_value(&ev) {
                        ctx.set_filter(value);
                    }
                }
            />
        </div>
    }
}
