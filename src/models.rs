//! Frontend Models
//!
//! List state shared by the handlers and the view.

use serde::{Deserialize, Serialize};

/// Ordered item texts, insertion order preserved.
///
/// Texts are kept exactly as typed; no trimming or case folding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList(Vec<String>);

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact, case-sensitive match
    pub fn contains(&self, text: &str) -> bool {
        self.0.iter().any(|item| item == text)
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.0.push(text.into());
    }

    /// Remove the first entry equal to `text`, returning its position
    pub fn remove_first(&mut self, text: &str) -> Option<usize> {
        let position = self.0.iter().position(|item| item == text)?;
        self.0.remove(position);
        Some(position)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for ItemList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

impl<'a> FromIterator<&'a str> for ItemList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

/// The item the next submit will replace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    /// View position when selected
    pub index: usize,
    /// Text when selected
    pub text: String,
}

/// Label and styling of the submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitMode {
    #[default]
    Add,
    Update,
}

impl SubmitMode {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitMode::Add => "+ Add Item",
            SubmitMode::Update => "✎ Update Item",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            SubmitMode::Add => "btn",
            SubmitMode::Update => "btn btn-update",
        }
    }
}

/// Application state passed into every handler
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    pub items: ItemList,
    pub editing: Option<EditTarget>,
    /// Current text of the item input field
    pub input: String,
    /// Current text of the filter field
    pub filter: String,
}

impl ListState {
    pub fn with_items(items: ItemList) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn submit_mode(&self) -> SubmitMode {
        if self.is_editing() {
            SubmitMode::Update
        } else {
            SubmitMode::Add
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_first_only_removes_one_duplicate() {
        let mut items: ItemList = ["Eggs", "Milk", "Eggs"].into_iter().collect();

        assert_eq!(items.remove_first("Eggs"), Some(0));
        assert_eq!(items.as_slice(), &["Milk".to_string(), "Eggs".to_string()]);
        assert_eq!(items.remove_first("Bread"), None);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_contains_is_exact() {
        let items: ItemList = ["Eggs"].into_iter().collect();
        assert!(items.contains("Eggs"));
        assert!(!items.contains("eggs"));
        assert!(!items.contains("Eggs "));
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let items: ItemList = ["a", "b"].into_iter().collect();
        assert_eq!(serde_json::to_string(&items).unwrap(), r#"["a","b"]"#);
    }

    #[test]
    fn test_submit_mode_follows_edit_state() {
        let mut state = ListState::default();
        assert_eq!(state.submit_mode(), SubmitMode::Add);

        state.editing = Some(EditTarget { index: 0, text: "Eggs".into() });
        assert_eq!(state.submit_mode(), SubmitMode::Update);
        assert_eq!(state.submit_mode().class(), "btn btn-update");
    }
}
