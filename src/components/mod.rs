//! UI Components
//!
//! Leptos components; all state changes go through `AppContext`.

mod clear_button;
mod filter_input;
mod item_form;
mod item_list;
mod list_item;

pub use clear_button::ClearButton;
pub use filter_input::FilterInput;
pub use item_form::ItemForm;
pub use item_list::ItemList;
pub use list_item::ListItem;

use wasm_bindgen::JsCast;

/// Current value of the `<input>` an event was fired on
pub(crate) fn input_value(ev: &web_sys::Event) -> Option<String> {
    ev.target()?
        .dyn_ref::<web_sys::HtmlInputElement>()
        .map(|input| input.value())
}
