//! Shared test doubles

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use shopping_list::{
    InteractionPort, KeyValueStore, ListConfig, ListManager, ListResult, ListState, MemoryStore,
    StorageError, SubmitOutcome,
};

/// Replays queued confirmation answers and records every prompt.
///
/// Runs out of answers -> declines.
#[derive(Default)]
pub struct ScriptedPort {
    answers: RefCell<VecDeque<bool>>,
    pub prompts: RefCell<Vec<String>>,
    pub notices: RefCell<Vec<String>>,
}

impl ScriptedPort {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().copied().collect()),
            ..Default::default()
        }
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }
}

impl InteractionPort for ScriptedPort {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}

pub type TestManager<'a> = ListManager<&'a MemoryStore, &'a ScriptedPort>;

pub fn manager<'a>(store: &'a MemoryStore, port: &'a ScriptedPort) -> TestManager<'a> {
    ListManager::new(store, port, &ListConfig::default())
}

/// Memory store whose writes can be switched to fail, like a full quota
#[derive(Default)]
pub struct FailingStore {
    pub inner: MemoryStore,
    failing: Cell<bool>,
}

impl FailingStore {
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.failing.get() {
            Err(StorageError::Access("QuotaExceededError".to_string()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.inner.remove(key)
    }
}

/// Type `text` into the input field and submit
pub fn submit(
    manager: &TestManager<'_>,
    state: &mut ListState,
    text: &str,
) -> ListResult<SubmitOutcome> {
    state.input = text.to_string();
    manager.submit(state)
}

/// Decoded persisted record, `None` when the key is absent
pub fn stored(store: &MemoryStore) -> Option<Vec<String>> {
    store
        .raw("items")
        .map(|raw| serde_json::from_str(&raw).expect("stored record is valid json"))
}

pub fn texts(state: &ListState) -> Vec<String> {
    state.items.as_slice().to_vec()
}
