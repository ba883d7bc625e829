//! Storage Failure Tests
//!
//! A refused write must leave both the state and the record as they were.

mod common;

use common::{texts, FailingStore, ScriptedPort};
use shopping_list::{ListConfig, ListError, ListManager, ListState, StorageError};

type FailingManager<'a> = ListManager<&'a FailingStore, &'a ScriptedPort>;

fn manager<'a>(store: &'a FailingStore, port: &'a ScriptedPort) -> FailingManager<'a> {
    ListManager::new(store, port, &ListConfig::default())
}

fn submit(
    manager: &FailingManager<'_>,
    state: &mut ListState,
    text: &str,
) -> Result<(), ListError> {
    state.input = text.to_string();
    manager.submit(state).map(|_| ())
}

fn is_storage_error(result: Result<(), ListError>) -> bool {
    matches!(result, Err(ListError::Storage(StorageError::Access(_))))
}

#[test]
fn test_failed_add_keeps_state_and_allows_retry() {
    let store = FailingStore::default();
    let port = ScriptedPort::default();
    let manager = manager(&store, &port);
    let mut state = ListState::default();
    store.set_failing(true);

    assert!(is_storage_error(submit(&manager, &mut state, "Eggs")));

    assert!(state.items.is_empty());
    assert_eq!(state.input, "Eggs");
    assert_eq!(store.inner.raw("items"), None);

    store.set_failing(false);
    manager.submit(&mut state).unwrap();
    assert_eq!(texts(&state), vec!["Eggs"]);
    assert_eq!(store.inner.raw("items").as_deref(), Some(r#"["Eggs"]"#));
    assert!(port.notices().is_empty());
}

#[test]
fn test_failed_edit_commit_keeps_edit_target() {
    let store = FailingStore::default();
    let port = ScriptedPort::default();
    let manager = manager(&store, &port);
    let mut state = ListState::default();
    submit(&manager, &mut state, "Eggs").unwrap();
    manager.select_for_edit(&mut state, 0).unwrap();
    store.set_failing(true);

    assert!(is_storage_error(submit(&manager, &mut state, "Milk")));

    assert_eq!(texts(&state), vec!["Eggs"]);
    assert!(state.is_editing());
    assert_eq!(state.input, "Milk");
    assert_eq!(store.inner.raw("items").as_deref(), Some(r#"["Eggs"]"#));
}

#[test]
fn test_failed_remove_keeps_item() {
    let store = FailingStore::default();
    let port = ScriptedPort::answering(&[true]);
    let manager = manager(&store, &port);
    let mut state = ListState::default();
    submit(&manager, &mut state, "Eggs").unwrap();
    submit(&manager, &mut state, "Milk").unwrap();
    store.set_failing(true);

    let result = manager.remove(&mut state, 0).map(|_| ());

    assert!(is_storage_error(result));
    assert_eq!(texts(&state), vec!["Eggs", "Milk"]);
    assert_eq!(store.inner.raw("items").as_deref(), Some(r#"["Eggs","Milk"]"#));
}

#[test]
fn test_failed_clear_keeps_list_and_edit() {
    let store = FailingStore::default();
    let port = ScriptedPort::default();
    let manager = manager(&store, &port);
    let mut state = ListState::default();
    submit(&manager, &mut state, "Eggs").unwrap();
    manager.select_for_edit(&mut state, 0).unwrap();
    manager.set_filter(&mut state, "eg");
    store.set_failing(true);

    assert!(is_storage_error(manager.clear_all(&mut state)));

    assert_eq!(texts(&state), vec!["Eggs"]);
    assert_eq!(state.editing.as_ref().map(|t| t.index), Some(0));
    assert_eq!(state.input, "Eggs");
    assert_eq!(state.filter, "eg");
    assert_eq!(store.inner.raw("items").as_deref(), Some(r#"["Eggs"]"#));
}
