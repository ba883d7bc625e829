//! List Manager
//!
//! Event handlers for the list. Each handler takes the [`ListState`],
//! rewrites the persisted record, then commits the change to the state and
//! runs the visibility refresh, all in one synchronous step. A failed write
//! leaves the state untouched.

use log::{debug, info, warn};

use crate::config::{ListConfig, Messages};
use crate::error::{ListError, ListResult, StorageError};
use crate::interaction::InteractionPort;
use crate::models::{EditTarget, ItemList, ListState};
use crate::storage::{KeyValueStore, PersistedRecord};

/// What a successful submit did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(String),
    /// Edit mode commit: `previous` was removed and `current` appended
    Replaced { previous: String, current: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(String),
    /// The user declined the confirmation prompt
    Declined,
}

/// Owns the persisted record and the interaction port
pub struct ListManager<S, P> {
    record: PersistedRecord<S>,
    port: P,
    messages: Messages,
}

impl<S: KeyValueStore, P: InteractionPort> ListManager<S, P> {
    pub fn new(store: S, port: P, config: &ListConfig) -> Self {
        Self {
            record: PersistedRecord::new(store, config.storage_key.clone()),
            port,
            messages: config.messages.clone(),
        }
    }

    pub fn record(&self) -> &PersistedRecord<S> {
        &self.record
    }

    /// Build the initial state from the persisted record.
    ///
    /// An undecodable record is treated as empty.
    pub fn load(&self) -> ListResult<ListState> {
        let items = match self.record.read() {
            Ok(items) => items,
            Err(StorageError::Decode(err)) => {
                warn!("Ignoring unreadable record '{}': {}", self.record.key(), err);
                ItemList::new()
            }
            Err(err) => return Err(err.into()),
        };
        info!("Loaded {} items from '{}'", items.len(), self.record.key());
        let mut state = ListState::with_items(items);
        refresh(&mut state);
        Ok(state)
    }

    /// Add the input text, or replace the edit target with it
    pub fn submit(&self, state: &mut ListState) -> ListResult<SubmitOutcome> {
        let text = state.input.clone();
        if text.trim().is_empty() {
            self.port.notify(&self.messages.empty_input);
            return Err(ListError::EmptyInput);
        }

        let mut items = state.items.clone();
        let outcome = match &state.editing {
            Some(target) => {
                // No duplicate check for the edited value
                items.remove_first(&target.text);
                items.push(text.clone());
                SubmitOutcome::Replaced {
                    previous: target.text.clone(),
                    current: text,
                }
            }
            None => {
                if items.contains(&text) {
                    self.port.notify(&self.messages.duplicate_item);
                    return Err(ListError::DuplicateItem(text));
                }
                items.push(text.clone());
                SubmitOutcome::Added(text)
            }
        };

        // Record first: a failed write leaves the state as it was
        self.record.write(&items)?;
        state.items = items;
        state.input.clear();
        refresh(state);
        info!("Submit: {:?} ({} items)", outcome, state.items.len());
        Ok(outcome)
    }

    /// Make the item at `index` the only edit target
    pub fn select_for_edit(&self, state: &mut ListState, index: usize) -> ListResult<()> {
        let text = state
            .items
            .get(index)
            .ok_or(ListError::UnknownItem(index))?
            .to_string();
        debug!("Editing item {}: {}", index, text);
        state.input = text.clone();
        state.editing = Some(EditTarget { index, text });
        Ok(())
    }

    /// Leave edit mode without changing any item
    pub fn cancel_edit(&self, state: &mut ListState) {
        if let Some(target) = state.editing.take() {
            debug!("Edit of '{}' cancelled", target.text);
            state.input.clear();
        }
    }

    /// Remove the item at `index` after the user confirms.
    ///
    /// Only the first item with that text goes; duplicates stay.
    pub fn remove(&self, state: &mut ListState, index: usize) -> ListResult<RemoveOutcome> {
        let text = state
            .items
            .get(index)
            .ok_or(ListError::UnknownItem(index))?
            .to_string();
        if !self.port.confirm(&self.messages.confirm_remove) {
            debug!("Removal of '{}' declined", text);
            return Ok(RemoveOutcome::Declined);
        }

        let mut items = state.items.clone();
        items.remove_first(&text);
        self.record.write(&items)?;
        state.items = items;
        refresh(state);
        info!("Removed '{}' ({} items left)", text, state.items.len());
        Ok(RemoveOutcome::Removed(text))
    }

    /// Empty the list and delete the persisted key
    pub fn clear_all(&self, state: &mut ListState) -> ListResult<()> {
        self.record.clear()?;
        let count = state.items.len();
        state.items.clear();
        state.filter.clear();
        refresh(state);
        info!("Cleared {} items", count);
        Ok(())
    }

    /// View-only; storage is never touched
    pub fn set_filter(&self, state: &mut ListState, query: impl Into<String>) {
        state.filter = query.into();
        debug!("Filter set to '{}'", state.filter);
    }
}

/// Runs after every committed mutation: abandons edit mode and drops the
/// filter once nothing is left to filter.
fn refresh(state: &mut ListState) {
    if state.editing.take().is_some() {
        state.input.clear();
    }
    if state.items.is_empty() {
        state.filter.clear();
    }
}
