use super::*;
use crate::util::ui_persistence::MemoryStore;

const KEY: &str = "theme";

#[derive(Debug, Default)]
struct FakeWidget {
    dark: bool,
    updates: usize,
}

impl ThemeWidget for FakeWidget {
    fn shows_dark(&self) -> bool {
        self.dark
    }

    fn show(&mut self, theme: Theme) {
        self.dark = theme.is_dark();
        self.updates += 1;
    }
}

fn controller(store: &MemoryStore) -> ThemeController<MemoryStore, FakeWidget> {
    ThemeController::new(
        store.clone(),
        KEY,
        FakeWidget::default(),
        Some(FakeWidget::default()),
        Some(FakeWidget::default()),
    )
}

fn widgets_dark(ctl: &ThemeController<MemoryStore, FakeWidget>) -> (bool, bool, bool) {
    (
        ctl.body().shows_dark(),
        ctl.button().is_some_and(FakeWidget::shows_dark),
        ctl.checkbox().is_some_and(FakeWidget::shows_dark),
    )
}

// =============================================================
// initialize
// =============================================================

#[test]
fn stored_dark_applies_everywhere() {
    let store = MemoryStore::new();
    store.insert(KEY, "dark");
    let mut ctl = controller(&store);
    assert_eq!(ctl.initialize(), Theme::Dark);
    assert_eq!(widgets_dark(&ctl), (true, true, true));
}

#[test]
fn stored_light_applies_nowhere() {
    let store = MemoryStore::new();
    store.insert(KEY, "light");
    let mut ctl = controller(&store);
    assert_eq!(ctl.initialize(), Theme::Light);
    assert_eq!(widgets_dark(&ctl), (false, false, false));
}

#[test]
fn missing_preference_defaults_to_light_even_if_body_was_dark() {
    let store = MemoryStore::new();
    let mut ctl = ThemeController::new(store.clone(), KEY, FakeWidget { dark: true, updates: 0 }, None, None);
    assert_eq!(ctl.initialize(), Theme::Light);
    assert!(!ctl.body().shows_dark());
}

#[test]
fn garbage_preference_defaults_to_light() {
    let store = MemoryStore::new();
    store.insert(KEY, "true");
    assert_eq!(read_preference(&store, KEY), Theme::Light);
}

#[test]
fn initialize_does_not_write_storage() {
    let store = MemoryStore::new();
    let mut ctl = controller(&store);
    ctl.initialize();
    assert_eq!(store.get(KEY), None);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_flips_applies_and_persists() {
    let store = MemoryStore::new();
    let mut ctl = controller(&store);
    ctl.initialize();

    assert_eq!(ctl.toggle(), Theme::Dark);
    assert_eq!(widgets_dark(&ctl), (true, true, true));
    assert_eq!(store.get(KEY).as_deref(), Some("dark"));
}

#[test]
fn toggle_twice_restores_original_state() {
    let store = MemoryStore::new();
    store.insert(KEY, "dark");
    let mut ctl = controller(&store);
    ctl.initialize();

    ctl.toggle();
    ctl.toggle();
    assert_eq!(ctl.current(), Theme::Dark);
    assert_eq!(widgets_dark(&ctl), (true, true, true));
    assert_eq!(store.get(KEY).as_deref(), Some("dark"));
}

#[test]
fn toggle_reads_body_marker_not_widget_state() {
    // A checkbox `change` event flips the checkbox before the handler runs.
    let store = MemoryStore::new();
    let mut ctl = controller(&store);
    ctl.initialize();
    if let Some(checkbox) = ctl.checkbox.as_mut() {
        checkbox.dark = true;
    }

    assert_eq!(ctl.toggle(), Theme::Dark);
    assert_eq!(widgets_dark(&ctl), (true, true, true));
}

#[test]
fn missing_widgets_are_skipped() {
    let store = MemoryStore::new();
    let mut ctl = ThemeController::new(store.clone(), KEY, FakeWidget::default(), None, None);
    ctl.initialize();
    assert_eq!(ctl.toggle(), Theme::Dark);
    assert!(ctl.button().is_none());
    assert!(ctl.checkbox().is_none());
    assert_eq!(ctl.body().updates, 2);
}

#[test]
fn failed_write_still_applies_theme() {
    let store = MemoryStore::read_only();
    let mut ctl = controller(&store);
    ctl.initialize();
    assert_eq!(ctl.toggle(), Theme::Dark);
    assert!(ctl.body().shows_dark());
    assert_eq!(store.get(KEY), None);
}
