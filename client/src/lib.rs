//! # client
//!
//! WASM glue for the chest X-ray prediction pages. Runs once when the page is
//! ready and then only in response to widget events:
//!
//! 1. apply the stored dark/light theme and keep both theme widgets in sync,
//! 2. replay the stored prediction history into the history list and record
//!    the result the server just rendered,
//! 3. draw that same history as a confidence chart (see the `chart` crate).
//!
//! All logic lives in plain modules tested natively with in-memory fakes;
//! the browser bindings in `dom` and the entry point are compiled only with
//! the `hydrate` feature.

pub mod app;
pub mod config;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

/// WASM entry point. Boots immediately if the DOM is parsed, otherwise on
/// `DOMContentLoaded`.
///
/// # Errors
///
/// Returns `Err` when there is no window or document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is unavailable"))?;

    if document.ready_state() == "loading" {
        let ready_doc = document.clone();
        let closure = Closure::<dyn FnMut()>::new(move || on_ready(&ready_doc));
        document.add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
        closure.forget();
    } else {
        on_ready(&document);
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
fn on_ready(document: &web_sys::Document) {
    let parsed = dom::read_config(document);
    let config = parsed.as_ref().map_or_else(|_| config::PageConfig::default(), Clone::clone);

    if console_log::init_with_level(config.log_level()).is_err() {
        log::debug!("logger already installed");
    }
    if let Err(err) = &parsed {
        log::warn!("ignoring malformed {}: {err}", config::CONFIG_ATTRIBUTE);
    }

    if let Err(err) = dom::boot_document(document, &config) {
        log::error!("page init failed: {err:?}");
    }
}
