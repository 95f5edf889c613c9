//! Browser storage for page state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers never touch `window.localStorage` directly. They hold a
//! [`KeyValueStore`], which is [`LocalStore`] in the browser and
//! [`MemoryStore`] in tests or when the browser refuses storage access
//! (private mode, disabled cookies). Reads never fail; writes report a
//! [`StoreError`] that callers log and otherwise ignore.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage rejected write to `{key}`")]
    Write { key: String },
    #[error("failed to encode value for `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key/value storage scoped to the page origin.
pub trait KeyValueStore {
    /// Stored value for `key`, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] when the backend rejects the write
    /// (quota exceeded, storage disabled).
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Load a JSON value stored under `key`.
///
/// Absent and malformed values both yield `None`; malformed ones are logged.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("ignoring malformed `{key}` in storage: {err}");
            None
        }
    }
}

/// Save `value` as JSON under `key`.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] if serialization fails or the backend's
/// write error.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode { key: key.to_owned(), source })?;
    store.set(key, &raw)
}

// =============================================================
// In-memory store
// =============================================================

/// Shared in-memory store. Clones see the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<BTreeMap<String, String>>>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, for exercising the write-error path.
    #[must_use]
    pub fn read_only() -> Self {
        Self { read_only: true, ..Self::default() }
    }

    /// Seed `key` regardless of `read_only`.
    pub fn insert(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Write { key: key.to_owned() });
        }
        self.insert(key, value);
        Ok(())
    }
}

// =============================================================
// Browser localStorage
// =============================================================

/// `window.localStorage` for the page origin.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    /// Open the origin's local storage.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when there is no window or the
    /// browser denies storage access.
    pub fn open() -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            _ => Err(StoreError::Unavailable),
        }
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).unwrap_or(None)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage.set_item(key, value).map_err(|_| StoreError::Write { key: key.to_owned() })
    }
}
