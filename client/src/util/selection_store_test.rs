use super::*;

fn store_with(raw: &str) -> SlotSelectionStore<MemorySlot> {
    SlotSelectionStore::new(MemorySlot::with_entry(SELECTED_TAPS_KEY, raw))
}

// =============================================================
// load
// =============================================================

#[test]
fn load_empty_slot_is_absent() {
    let store = SlotSelectionStore::new(MemorySlot::new());
    assert_eq!(store.load(), None);
}

#[test]
fn load_wildcard_marker() {
    assert_eq!(store_with(r#""*""#).load(), Some(Selection::All));
}

#[test]
fn load_id_array() {
    let expected = Selection::subset(["tap-1", "tap-2"]);
    assert_eq!(store_with(r#"["tap-2","tap-1"]"#).load(), expected);
}

#[test]
fn load_discards_wrong_shapes() {
    for raw in ["{}", "true", "[]", r#"[1,2]"#, r#""everything""#, "garbage"] {
        assert_eq!(store_with(raw).load(), None, "expected {raw:?} to be discarded");
    }
}

#[test]
fn load_does_not_write() {
    let slot = MemorySlot::with_entry(SELECTED_TAPS_KEY, "garbage");
    let store = SlotSelectionStore::new(slot.clone());
    let _ = store.load();
    assert_eq!(slot.writes(), 0);
}

// =============================================================
// save
// =============================================================

#[test]
fn save_writes_encoded_value_under_key() {
    let slot = MemorySlot::new();
    let store = SlotSelectionStore::new(slot.clone());
    store.save(&Selection::subset(["tap-9"]).unwrap());
    assert_eq!(slot.raw(SELECTED_TAPS_KEY).as_deref(), Some(r#"["tap-9"]"#));
    assert_eq!(slot.writes(), 1);
}

#[test]
fn save_then_load_returns_same_selection() {
    let store = SlotSelectionStore::new(MemorySlot::new());
    store.save(&Selection::All);
    assert_eq!(store.load(), Some(Selection::All));
}

#[test]
fn memory_slot_clones_share_entries() {
    let slot = MemorySlot::new();
    let store = SlotSelectionStore::new(slot.clone());
    store.save(&Selection::All);
    assert_eq!(slot.raw(SELECTED_TAPS_KEY).as_deref(), Some(r#""*""#));
    assert_eq!(slot.writes(), 1);
}

// =============================================================
// BrowserSlot (non-hydrate fallbacks)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_slot_reads_nothing_off_browser() {
    let slot = BrowserSlot;
    slot.set(SELECTED_TAPS_KEY, r#""*""#);
    assert_eq!(slot.get(SELECTED_TAPS_KEY), None);
}
