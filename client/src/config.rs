//! Page bindings: element ids, storage keys and log level.
//!
//! Every field has a default matching the server-rendered templates. A page
//! can override any subset with a JSON object on the body element:
//!
//! ```html
//! <body data-page-config='{"history_key": "xray_history", "log_level": "debug"}'>
//! ```

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Body attribute carrying JSON overrides for [`PageConfig`].
pub const CONFIG_ATTRIBUTE: &str = "data-page-config";

pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DEFAULT_HISTORY_KEY: &str = "history";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub theme_key: String,
    pub history_key: String,
    pub upload_form_id: String,
    pub loading_overlay_id: String,
    pub theme_button_id: String,
    pub theme_checkbox_id: String,
    pub history_list_id: String,
    pub chart_canvas_id: String,
    /// CSS selector, not an id: the server marks the newest result by class.
    pub latest_result_selector: String,
    /// Body class present while dark mode is applied.
    pub dark_class: String,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.into(),
            history_key: DEFAULT_HISTORY_KEY.into(),
            upload_form_id: "upload-form".into(),
            loading_overlay_id: "loading-overlay".into(),
            theme_button_id: "theme-toggle".into(),
            theme_checkbox_id: "themeToggle".into(),
            history_list_id: "history".into(),
            chart_canvas_id: "historyChart".into(),
            latest_result_selector: ".alert-info".into(),
            dark_class: "dark-mode".into(),
            log_level: "info".into(),
        }
    }
}

impl PageConfig {
    /// Parse the body attribute value. A missing or blank attribute is the default config.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when the attribute is present but malformed;
    /// callers log it and fall back to [`PageConfig::default`].
    pub fn parse(raw: Option<&str>) -> Result<Self, serde_json::Error> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(json) => serde_json::from_str(json),
        }
    }

    /// Configured log level, `Info` when unrecognized.
    pub fn log_level(&self) -> log::Level {
        self.log_level.trim().parse().unwrap_or(log::Level::Info)
    }
}
