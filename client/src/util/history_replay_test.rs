use super::*;
use crate::util::ui_persistence::MemoryStore;

const KEY: &str = "history";

#[derive(Debug, Default)]
struct FakeList {
    items: Vec<(String, ResultTone)>,
}

impl FakeList {
    fn texts(&self) -> Vec<&str> {
        self.items.iter().map(|(t, _)| t.as_str()).collect()
    }
}

impl ListMount for FakeList {
    fn clear(&mut self) {
        self.items.clear();
    }

    fn append(&mut self, text: &str, tone: ResultTone) {
        self.items.push((text.to_owned(), tone));
    }
}

fn seeded(raw: &str) -> MemoryStore {
    let store = MemoryStore::new();
    store.insert(KEY, raw);
    store
}

#[test]
fn replays_stored_entries_in_order() {
    let mut list = FakeList::default();
    let history = HistoryReplay::new(seeded(r#"["A (0.10)", "B (0.20)", "C (0.30)"]"#), KEY, Some(&mut list))
        .initialize(None);

    assert_eq!(list.texts(), vec!["A (0.10)", "B (0.20)", "C (0.30)"]);
    assert_eq!(history.entries(), ["A (0.10)", "B (0.20)", "C (0.30)"]);
}

#[test]
fn rerunning_without_new_result_does_not_duplicate() {
    let mut list = FakeList::default();
    let mut replay = HistoryReplay::new(seeded(r#"["A (0.10)", "B (0.20)"]"#), KEY, Some(&mut list));
    replay.initialize(None);
    replay.initialize(None);
    assert_eq!(list.texts().len(), 2);
}

#[test]
fn latest_result_is_appended_and_persisted() {
    let store = seeded(r#"["A (0.10)"]"#);
    let mut list = FakeList::default();
    let history = HistoryReplay::new(store.clone(), KEY, Some(&mut list)).initialize(Some("  Positive (0.93)\n"));

    assert_eq!(list.texts(), vec!["A (0.10)", "Positive (0.93)"]);
    assert_eq!(history.entries(), ["A (0.10)", "Positive (0.93)"]);
    assert_eq!(History::load(&store, KEY), history);
}

#[test]
fn latest_result_is_recorded_once_per_load() {
    let store = seeded("[]");
    let mut list = FakeList::default();
    let mut replay = HistoryReplay::new(store.clone(), KEY, Some(&mut list));
    replay.initialize(Some("NORMAL (0.91)"));
    let history = replay.initialize(Some("NORMAL (0.91)"));

    assert_eq!(history.len(), 1);
    assert_eq!(list.texts(), vec!["NORMAL (0.91)"]);
    assert_eq!(History::load(&store, KEY).len(), 1);
}

#[test]
fn blank_latest_result_is_ignored() {
    let store = MemoryStore::new();
    let history = HistoryReplay::new(store.clone(), KEY, Some(FakeList::default())).initialize(Some("   "));
    assert!(history.is_empty());
    assert_eq!(store.get(KEY), None);
}

#[test]
fn duplicate_results_are_kept() {
    let history = HistoryReplay::new(seeded(r#"["NORMAL (0.91)"]"#), KEY, Some(FakeList::default()))
        .initialize(Some("NORMAL (0.91)"));
    assert_eq!(history.entries(), ["NORMAL (0.91)", "NORMAL (0.91)"]);
}

#[test]
fn malformed_storage_replays_nothing() {
    let mut list = FakeList::default();
    let history = HistoryReplay::new(seeded("definitely not json"), KEY, Some(&mut list)).initialize(None);
    assert!(history.is_empty());
    assert!(list.items.is_empty());
}

#[test]
fn malformed_storage_is_replaced_by_latest_result() {
    let store = seeded("{broken");
    HistoryReplay::new(store.clone(), KEY, Some(FakeList::default())).initialize(Some("PNEUMONIA (0.77)"));
    assert_eq!(store.get(KEY).as_deref(), Some(r#"["PNEUMONIA (0.77)"]"#));
}

#[test]
fn missing_mount_skips_render_and_write() {
    let store = seeded(r#"["A (0.10)"]"#);
    let history = HistoryReplay::<_, FakeList>::new(store.clone(), KEY, None).initialize(Some("Positive (0.93)"));

    assert_eq!(history.entries(), ["A (0.10)"]);
    assert_eq!(store.get(KEY).as_deref(), Some(r#"["A (0.10)"]"#));
}

#[test]
fn failed_write_still_shows_latest_result() {
    let mut list = FakeList::default();
    let history = HistoryReplay::new(MemoryStore::read_only(), KEY, Some(&mut list)).initialize(Some("PNEUMONIA (0.88)"));
    assert_eq!(history.len(), 1);
    assert_eq!(list.texts(), vec!["PNEUMONIA (0.88)"]);
}

#[test]
fn items_carry_result_tone() {
    let mut list = FakeList::default();
    HistoryReplay::new(seeded(r#"["PNEUMONIA (0.87)", "NORMAL (0.91)", "Error"]"#), KEY, Some(&mut list))
        .initialize(None);
    let tones = list.items.iter().map(|(_, t)| *t).collect::<Vec<_>>();
    assert_eq!(tones, vec![ResultTone::Danger, ResultTone::Success, ResultTone::Warning]);
}
