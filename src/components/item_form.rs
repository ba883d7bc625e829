//! Item Form Component
//!
//! Text input plus submit button; the button switches to update mode while
//! an item is being edited.

use leptos::prelude::*;

use crate::components::input_value;
use crate::context::use_app_context;

/// Form for adding a new item or committing an edit
#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let mode = move || ctx.state.with(|state| state.submit_mode());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form id="item-form" on:submit=on_submit>
            <div class="form-control">
                <input
                    type="text"
                    class="form-input"
                    id="item-input"
                    placeholder="Enter Item"
                    prop:value=move || ctx.state.with(|state| state.input.clone())
                    on:input=move |ev| {
                        if let Some(value) = input_value(&ev) {
                            ctx.set_input(value);
                        }
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ctx.cancel_edit();
                        }
                    }
                />
            </div>
            <div class="form-control">
                <button type="submit" class=move || mode().class()>
                    {move || mode().label()}
                </button>
            </div>
        </form>
    }
}
