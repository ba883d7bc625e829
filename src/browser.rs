//! Browser Adapters
//!
//! `window.localStorage`, `window.confirm`/`window.alert` and the console,
//! behind the crate's storage and interaction traits.

use wasm_bindgen::{JsCast, JsValue};

use crate::error::StorageError;
use crate::interaction::InteractionPort;
use crate::manager::ListManager;
use crate::storage::KeyValueStore;

/// List manager wired to the real browser
pub type BrowserListManager = ListManager<WebStorage, BrowserDialogs>;

/// Handle to `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct WebStorage;

impl WebStorage {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|e| StorageError::Access(js_error_message(&e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Access(js_error_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Access(js_error_message(&e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Access(js_error_message(&e)))
    }
}

/// Native blocking dialogs
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl InteractionPort for BrowserDialogs {
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Text of the `<script type="application/json">` config element, if present
pub fn read_config_script(element_id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(element_id)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

/// Write a log line to the matching console method
pub fn console_sink(line: &rolling_logger::LogLine) {
    let text = JsValue::from_str(&line.to_string());
    match line.level {
        log::Level::Error => web_sys::console::error_1(&text),
        log::Level::Warn => web_sys::console::warn_1(&text),
        _ => web_sys::console::log_1(&text),
    }
}

/// Chain the console panic hook with a dump of the buffered log lines
pub fn install_panic_hook(logger: &'static rolling_logger::RollingLogger) {
    std::panic::set_hook(Box::new(move |info| {
        console_error_panic_hook::hook(info);
        let recent = logger.render_recent();
        if !recent.is_empty() {
            let report = format!("Recent log lines before panic:\n{}", recent);
            web_sys::console::error_1(&JsValue::from_str(&report));
        }
    }));
}

/// Best-effort message from a thrown JS value (e.g. `QuotaExceededError`)
fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
