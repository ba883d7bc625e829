//! Application Context
//!
//! List state signal and the browser-backed manager, provided via Leptos
//! Context API. Components call the handler methods here; nothing else
//! writes to the state.

use leptos::prelude::*;
use log::{debug, error};

use crate::browser::BrowserListManager;
use crate::error::ListResult;
use crate::models::ListState;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current list state - read by the view
    pub state: RwSignal<ListState>,
    manager: StoredValue<BrowserListManager>,
}

impl AppContext {
    /// Load the persisted list and wrap it in a signal
    pub fn new(manager: BrowserListManager) -> Self {
        let initial = manager.load().unwrap_or_else(|err| {
            error!("Could not load items, starting empty: {}", err);
            ListState::default()
        });
        Self {
            state: RwSignal::new(initial),
            manager: StoredValue::new(manager),
        }
    }

    pub fn submit(&self) {
        self.run("submit", |manager, state| manager.submit(state));
    }

    /// Click on an item body
    pub fn select(&self, index: usize) {
        self.run("select", |manager, state| manager.select_for_edit(state, index));
    }

    /// Click on an item's delete button
    pub fn remove(&self, index: usize) {
        self.run("remove", |manager, state| manager.remove(state, index));
    }

    pub fn clear_all(&self) {
        self.run("clear", |manager, state| manager.clear_all(state));
    }

    pub fn cancel_edit(&self) {
        self.run("cancel edit", |manager, state| {
            manager.cancel_edit(state);
            Ok(())
        });
    }

    pub fn set_filter(&self, query: String) {
        self.run("filter", |manager, state| {
            manager.set_filter(state, query);
            Ok(())
        });
    }

    /// Mirror the input field into state
    pub fn set_input(&self, text: String) {
        self.state.update(|state| state.input = text);
    }

    fn run<T>(
        &self,
        action: &str,
        handler: impl FnOnce(&BrowserListManager, &mut ListState) -> ListResult<T>,
    ) {
        let state = self.state;
        let result = self
            .manager
            .with_value(|manager| state.try_update(|current| handler(manager, current)));
        match result {
            Some(Err(err)) if err.is_validation() => debug!("{} rejected: {}", action, err),
            Some(Err(err)) => error!("{} failed: {}", action, err),
            Some(Ok(_)) => {}
            None => error!("{} skipped: list state was disposed", action),
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
