//! Shopping List
//!
//! Client-side list manager: add, edit, delete, filter and clear text
//! items, persisted in `localStorage` under a single key.
//!
//! Layers:
//! - models / filter / render: plain data and pure view derivation
//! - storage / interaction: traits at the browser seam
//! - manager: the event handlers
//! - browser / context / components / app: Leptos and web-sys glue

pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod filter;
pub mod interaction;
pub mod manager;
pub mod models;
pub mod render;
pub mod storage;

pub use config::ListConfig;
pub use error::{ConfigError, ListError, ListResult, StorageError};
pub use interaction::InteractionPort;
pub use manager::{ListManager, RemoveOutcome, SubmitOutcome};
pub use models::{EditTarget, ItemList, ListState, SubmitMode};
pub use storage::{KeyValueStore, MemoryStore, PersistedRecord};
