//! App Configuration
//!
//! Settings read once at start-up from the `app-config` JSON block in
//! `index.html`. Every field has a default, so a partial block is fine.

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the `<script type="application/json">` element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// localStorage key of the persisted item array
    pub storage_key: String,
    pub log_level: String,
    /// Lines kept by the in-memory log buffer
    pub log_capacity: usize,
    pub messages: Messages,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            storage_key: "items".to_string(),
            log_level: "info".to_string(),
            log_capacity: 200,
            messages: Messages::default(),
        }
    }
}

/// Texts shown by the interaction port
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub empty_input: String,
    pub duplicate_item: String,
    pub confirm_remove: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            empty_input: "Please enter an item".to_string(),
            duplicate_item: "That item already exists!".to_string(),
            confirm_remove: "Are you sure?".to_string(),
        }
    }
}

impl ListConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ListConfig = serde_json::from_str(json)?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
