//! History replay into the page's history list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is always rebuilt from storage, never from what the DOM already
//! shows. When the server just rendered a fresh result, that text is appended
//! once per page load; it is the only path that grows the stored history.

use crate::state::history::{History, ResultTone};
use crate::util::ui_persistence::KeyValueStore;

#[cfg(test)]
#[path = "history_replay_test.rs"]
mod history_replay_test;

/// The element history entries are rendered into.
pub trait ListMount {
    /// Remove every rendered entry.
    fn clear(&mut self);

    /// Render one entry at the end of the list.
    fn append(&mut self, text: &str, tone: ResultTone);
}

impl<M: ListMount + ?Sized> ListMount for &mut M {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn append(&mut self, text: &str, tone: ResultTone) {
        (**self).append(text, tone);
    }
}

pub struct HistoryReplay<S, M> {
    store: S,
    key: String,
    mount: Option<M>,
    latest_recorded: bool,
}

impl<S: KeyValueStore, M: ListMount> HistoryReplay<S, M> {
    pub fn new(store: S, key: impl Into<String>, mount: Option<M>) -> Self {
        Self { store, key: key.into(), mount, latest_recorded: false }
    }

    /// Replay stored entries into the mount and record `latest` if present.
    ///
    /// Returns the history the chart should plot, which is exactly what the
    /// list shows. Without a mount nothing is rendered or written and the
    /// stored history is returned as is.
    pub fn initialize(&mut self, latest: Option<&str>) -> History {
        let mut history = History::load(&self.store, &self.key);
        let Some(mount) = self.mount.as_mut() else {
            log::debug!("no history mount; replay skipped");
            return history;
        };

        mount.clear();
        for entry in history.iter() {
            mount.append(entry, ResultTone::of(entry));
        }

        let latest = latest.map(str::trim).filter(|text| !text.is_empty());
        if let Some(text) = latest {
            if !self.latest_recorded {
                mount.append(text, ResultTone::of(text));
                history.push(text);
                self.latest_recorded = true;
                if let Err(err) = history.save(&self.store, &self.key) {
                    log::warn!("latest result not saved to history: {err}");
                }
            }
        }

        log::debug!("history replayed: {} entries", history.len());
        history
    }
}
