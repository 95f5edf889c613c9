//! Browser bindings: element lookup, widget adapters and event wiring.
//!
//! Everything here is thin glue over `web-sys`. Element lookups return
//! `Option` so a page without a given widget simply skips that behavior.

use std::cell::RefCell;
use std::rc::Rc;

use chart::Chart;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::app::{self, PageSlots};
use crate::config::{CONFIG_ATTRIBUTE, PageConfig};
use crate::state::history::{History, ResultTone};
use crate::state::theme::Theme;
use crate::util::dark_mode::{ThemeController, ThemeWidget};
use crate::util::history_replay::ListMount;
use crate::util::ui_persistence::{KeyValueStore, LocalStore, MemoryStore, StoreError};

/// Class on the header toggle button while dark mode is on.
const BUTTON_ACTIVE_CLASS: &str = "active";

/// Class that keeps the loading overlay hidden until a submit.
const OVERLAY_HIDDEN_CLASS: &str = "hidden";

// =============================================================
// Widgets
// =============================================================

/// A DOM element that mirrors the theme.
pub enum DomWidget {
    /// Body: `class` present while dark.
    Marker { el: Element, class: String },
    /// Header button: active class plus `aria-pressed`.
    Button { el: Element },
    /// Settings checkbox: checked while dark.
    Checkbox { input: HtmlInputElement },
}

impl ThemeWidget for DomWidget {
    fn shows_dark(&self) -> bool {
        match self {
            Self::Marker { el, class } => el.class_list().contains(class),
            Self::Button { el } => el.class_list().contains(BUTTON_ACTIVE_CLASS),
            Self::Checkbox { input } => input.checked(),
        }
    }

    fn show(&mut self, theme: Theme) {
        let dark = theme.is_dark();
        let result = match self {
            Self::Marker { el, class } => el.class_list().toggle_with_force(class, dark).map(drop),
            Self::Button { el } => el
                .class_list()
                .toggle_with_force(BUTTON_ACTIVE_CLASS, dark)
                .and_then(|_| el.set_attribute("aria-pressed", if dark { "true" } else { "false" })),
            Self::Checkbox { input } => {
                input.set_checked(dark);
                Ok(())
            }
        };
        if let Err(err) = result {
            log::warn!("theme widget not updated: {err:?}");
        }
    }
}

/// The history `<ul>`/`<ol>` element.
pub struct DomList {
    document: Document,
    mount: Element,
}

impl DomList {
    fn append_item(&self, text: &str, tone: ResultTone) -> Result<(), JsValue> {
        let item = self.document.create_element("li")?;
        item.set_text_content(Some(text));
        let [base, toned] = tone.item_classes();
        item.class_list().add_2(base, toned)?;
        self.mount.append_child(&item)?;
        Ok(())
    }
}

impl ListMount for DomList {
    fn clear(&mut self) {
        self.mount.set_inner_html("");
    }

    fn append(&mut self, text: &str, tone: ResultTone) {
        if let Err(err) = self.append_item(text, tone) {
            log::warn!("history item not rendered: {err:?}");
        }
    }
}

// =============================================================
// Lookup
// =============================================================

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let el = document.get_element_by_id(id)?;
    match el.dyn_into::<T>() {
        Ok(typed) => Some(typed),
        Err(_) => {
            log::warn!("#{id} has an unexpected element type; ignoring it");
            None
        }
    }
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("invalid selector {selector:?}: {err:?}");
            None
        }
    }
}

/// Mark the newest-result element with the tone of its text.
fn tag_result_tone(el: &Element, text: &str) {
    if let Err(err) = el.class_list().add_1(ResultTone::of(text).css_class()) {
        log::debug!("latest result tone not applied: {err:?}");
    }
}

/// The origin's local storage, or an in-memory stand-in when the browser denies it.
#[derive(Clone)]
pub enum PageStore {
    Local(LocalStore),
    Memory(MemoryStore),
}

impl PageStore {
    fn open() -> Self {
        match LocalStore::open() {
            Ok(store) => Self::Local(store),
            Err(err) => {
                log::warn!("{err}; page state will not persist");
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for PageStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(store) => store.get(key),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            Self::Local(store) => store.set(key, value),
            Self::Memory(store) => store.set(key, value),
        }
    }
}

// =============================================================
// Boot
// =============================================================

/// Read the body's config attribute. Missing body or attribute yields defaults.
pub fn read_config(document: &Document) -> Result<PageConfig, serde_json::Error> {
    let raw = document.body().and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
    PageConfig::parse(raw.as_deref())
}

/// Initialize theme, history and chart for `document`, then wire events.
///
/// # Errors
///
/// Returns `Err` if the document has no body or an event listener cannot be
/// attached. Chart drawing failures are logged, not returned.
pub fn boot_document(document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let body = document.body().ok_or_else(|| JsValue::from_str("document body is unavailable"))?;
    let button = element_by_id::<Element>(document, &config.theme_button_id);
    let checkbox = element_by_id::<HtmlInputElement>(document, &config.theme_checkbox_id);

    let latest = query(document, &config.latest_result_selector);
    let latest_text = latest.as_ref().and_then(|el| el.text_content());
    if let (Some(el), Some(text)) = (&latest, &latest_text) {
        tag_result_tone(el, text);
    }

    let slots = PageSlots {
        body: DomWidget::Marker { el: body.into(), class: config.dark_class.clone() },
        theme_button: button.clone().map(|el| DomWidget::Button { el }),
        theme_checkbox: checkbox.clone().map(|input| DomWidget::Checkbox { input }),
        history_mount: element_by_id::<Element>(document, &config.history_list_id)
            .map(|mount| DomList { document: document.clone(), mount }),
        latest_result: latest_text,
    };

    let page = app::boot(config, PageStore::open(), slots);

    render_chart(document, config, &page.entries);
    wire_theme(Rc::new(RefCell::new(page.theme)), button, checkbox)?;
    wire_upload(
        element_by_id::<HtmlFormElement>(document, &config.upload_form_id),
        element_by_id::<HtmlElement>(document, &config.loading_overlay_id),
    )?;
    Ok(())
}

fn render_chart(document: &Document, config: &PageConfig, history: &History) {
    let Some(canvas) = element_by_id::<HtmlCanvasElement>(document, &config.chart_canvas_id) else {
        return;
    };
    let mut chart = match Chart::mount(canvas) {
        Ok(Some(chart)) => chart,
        Ok(None) => {
            log::debug!("chart canvas has no 2d context");
            return;
        }
        Err(err) => {
            log::warn!("chart not mounted: {err:?}");
            return;
        }
    };
    if let Err(err) = chart.render(history.entries()) {
        log::warn!("chart render failed: {err:?}");
    }
}

// =============================================================
// Events
// =============================================================

type SharedTheme = Rc<RefCell<ThemeController<PageStore, DomWidget>>>;

fn wire_theme(theme: SharedTheme, button: Option<Element>, checkbox: Option<HtmlInputElement>) -> Result<(), JsValue> {
    if let Some(button) = button {
        listen(&button, "click", toggle_handler(theme.clone()))?;
    }
    if let Some(checkbox) = checkbox {
        listen(&checkbox, "change", toggle_handler(theme))?;
    }
    Ok(())
}

fn toggle_handler(theme: SharedTheme) -> impl FnMut(web_sys::Event) + 'static {
    move |_event| {
        // Use try_borrow_mut so a re-entrant event cannot panic.
        match theme.try_borrow_mut() {
            Ok(mut ctl) => {
                let next = ctl.toggle();
                log::debug!("theme toggled to {next}");
            }
            Err(_) => log::warn!("theme toggle ignored: controller busy"),
        }
    }
}

fn wire_upload(form: Option<HtmlFormElement>, overlay: Option<HtmlElement>) -> Result<(), JsValue> {
    let (Some(form), Some(overlay)) = (form, overlay) else {
        return Ok(());
    };
    // Native submission proceeds; only the overlay is shown.
    listen(&form, "submit", move |_event: web_sys::Event| {
        let shown = overlay
            .class_list()
            .remove_1(OVERLAY_HIDDEN_CLASS)
            .and_then(|()| overlay.style().set_property("display", "flex"));
        if let Err(err) = shown {
            log::warn!("loading overlay not shown: {err:?}");
        }
    })
}

/// Attach `handler` for the page's lifetime.
fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
