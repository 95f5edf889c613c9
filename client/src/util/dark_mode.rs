//! Dark mode initialization and toggle.
//!
//! Reads the stored preference, applies it to the body marker and keeps the
//! header button and settings checkbox in sync. Toggle reads the mode back
//! from the body marker, so a click on the button and a change on the
//! checkbox converge on the same state whichever fired.
//!
//! TRADE-OFFS
//! ==========
//! Either widget may be missing from a given page; each is an `Option` and is
//! simply skipped. A failed preference write is logged and the applied mode
//! stays in effect for the current page.

use crate::state::theme::Theme;
use crate::util::ui_persistence::KeyValueStore;

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// A page element that mirrors the theme mode.
pub trait ThemeWidget {
    /// Whether the element currently shows dark mode.
    fn shows_dark(&self) -> bool;

    /// Update the element to show `theme`.
    fn show(&mut self, theme: Theme);
}

/// Read the stored preference, defaulting to light.
pub fn read_preference(store: &impl KeyValueStore, key: &str) -> Theme {
    match store.get(key) {
        Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
            log::warn!("unrecognized theme preference {raw:?}; using light");
            Theme::Light
        }),
        None => Theme::Light,
    }
}

pub struct ThemeController<S, W> {
    store: S,
    key: String,
    body: W,
    button: Option<W>,
    checkbox: Option<W>,
}

impl<S: KeyValueStore, W: ThemeWidget> ThemeController<S, W> {
    pub fn new(store: S, key: impl Into<String>, body: W, button: Option<W>, checkbox: Option<W>) -> Self {
        Self { store, key: key.into(), body, button, checkbox }
    }

    /// Apply the stored preference (light when absent) to the body and both widgets.
    pub fn initialize(&mut self) -> Theme {
        let theme = read_preference(&self.store, &self.key);
        self.apply(theme);
        log::debug!("theme initialized: {theme}");
        theme
    }

    /// Flip the mode shown by the body marker, apply and persist it.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current().toggled();
        self.apply(next);
        if let Err(err) = self.store.set(&self.key, next.as_str()) {
            log::warn!("theme preference not saved: {err}");
        }
        next
    }

    /// Mode currently applied to the body marker.
    pub fn current(&self) -> Theme {
        Theme::from_dark(self.body.shows_dark())
    }

    pub fn body(&self) -> &W {
        &self.body
    }

    pub fn button(&self) -> Option<&W> {
        self.button.as_ref()
    }

    pub fn checkbox(&self) -> Option<&W> {
        self.checkbox.as_ref()
    }

    fn apply(&mut self, theme: Theme) {
        self.body.show(theme);
        for widget in [self.button.as_mut(), self.checkbox.as_mut()].into_iter().flatten() {
            widget.show(theme);
        }
    }
}
