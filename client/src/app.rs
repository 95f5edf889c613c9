//! Page composition: initialize theme, then history, then hand the history to the chart.

use chart::LineSeries;

use crate::config::PageConfig;
use crate::state::history::History;
use crate::util::dark_mode::{ThemeController, ThemeWidget};
use crate::util::history_replay::{HistoryReplay, ListMount};
use crate::util::ui_persistence::KeyValueStore;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Elements found on the current page. Every slot but the body is optional.
pub struct PageSlots<W, M> {
    pub body: W,
    pub theme_button: Option<W>,
    pub theme_checkbox: Option<W>,
    pub history_mount: Option<M>,
    /// Text of the newest-result element, when the server just rendered one.
    pub latest_result: Option<String>,
}

/// Initialized page state. The theme controller stays alive for event handlers;
/// the history replay is done once the list is built.
pub struct Page<S, W> {
    pub theme: ThemeController<S, W>,
    pub entries: History,
}

impl<S, W> Page<S, W> {
    /// Series the chart plots for this page.
    pub fn series(&self) -> LineSeries {
        LineSeries::from_entries(self.entries.entries())
    }
}

/// Run the page-ready sequence against `store` and the discovered `slots`.
pub fn boot<S, W, M>(config: &PageConfig, store: S, slots: PageSlots<W, M>) -> Page<S, W>
where
    S: KeyValueStore + Clone,
    W: ThemeWidget,
    M: ListMount,
{
    let PageSlots { body, theme_button, theme_checkbox, history_mount, latest_result } = slots;

    let mut theme = ThemeController::new(store.clone(), &config.theme_key, body, theme_button, theme_checkbox);
    theme.initialize();

    let entries = HistoryReplay::new(store, &config.history_key, history_mount).initialize(latest_result.as_deref());

    Page { theme, entries }
}
