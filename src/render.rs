//! View Derivation
//!
//! Pure functions turning a [`ListState`] into what the components draw.
//! Calling them again on the same state yields the same output.

use crate::filter::matches_filter;
use crate::models::{ListState, SubmitMode};

/// One rendered `<li>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemRow {
    pub index: usize,
    pub text: String,
    /// Marked as the edit target
    pub editing: bool,
    /// Passes the current filter
    pub visible: bool,
}

impl ItemRow {
    pub fn class(&self) -> &'static str {
        if self.editing {
            "edit-mode"
        } else {
            ""
        }
    }
}

/// Controls around the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub show_clear: bool,
    pub show_filter: bool,
    pub submit: SubmitMode,
    pub item_count: usize,
}

pub fn rows(state: &ListState) -> Vec<ItemRow> {
    let editing_index = state.editing.as_ref().map(|target| target.index);
    state
        .items
        .iter()
        .enumerate()
        .map(|(index, text)| ItemRow {
            index,
            text: text.to_string(),
            editing: editing_index == Some(index),
            visible: matches_filter(&state.filter, text),
        })
        .collect()
}

pub fn chrome(state: &ListState) -> Chrome {
    let has_items = !state.items.is_empty();
    Chrome {
        show_clear: has_items,
        show_filter: has_items,
        submit: state.submit_mode(),
        item_count: state.items.len(),
    }
}

/// "1 item" / "N items"
pub fn count_label(count: usize) -> String {
    match count {
        1 => "1 item".to_string(),
        n => format!("{} items", n),
    }
}
