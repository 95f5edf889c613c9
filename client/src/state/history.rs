//! Prediction history and result tone.
//!
//! The history is an append-only list of result strings in arrival order.
//! It is persisted as a JSON array of strings; anything else under the key
//! reads as an empty history.

use serde::{Deserialize, Serialize};

use crate::util::ui_persistence::{KeyValueStore, StoreError, load_json, save_json};

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

/// Class every rendered history item carries, matching the page's list styling.
pub const HISTORY_ITEM_CLASS: &str = "list-group-item";

/// Ordered result strings, oldest first. Duplicates are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    #[must_use]
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Read the stored history. Absent or malformed data is an empty history.
    pub fn load(store: &impl KeyValueStore, key: &str) -> Self {
        load_json(store, key).unwrap_or_default()
    }

    /// Persist the full list under `key`.
    ///
    /// # Errors
    ///
    /// Propagates the store's write error.
    pub fn save(&self, store: &impl KeyValueStore, key: &str) -> Result<(), StoreError> {
        save_json(store, key, self)
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Visual tone of a result, from the diagnosis word in its text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultTone {
    /// Pneumonia detected.
    Danger,
    /// Normal scan.
    Success,
    /// Anything else, including error text.
    Warning,
}

impl ResultTone {
    /// Classify result text. `PNEUMONIA` wins over `NORMAL`; matching ignores case.
    #[must_use]
    pub fn of(text: &str) -> Self {
        let upper = text.to_ascii_uppercase();
        if upper.contains("PNEUMONIA") {
            Self::Danger
        } else if upper.contains("NORMAL") {
            Self::Success
        } else {
            Self::Warning
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Danger => "result-danger",
            Self::Success => "result-success",
            Self::Warning => "result-warning",
        }
    }

    /// Classes for a history list item showing a result of this tone.
    #[must_use]
    pub fn item_classes(self) -> [&'static str; 2] {
        [HISTORY_ITEM_CLASS, self.css_class()]
    }
}
