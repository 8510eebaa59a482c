//! Persisted slot for the committed tap selection.
//!
//! DESIGN
//! ======
//! The store is injected into the reconciler rather than reached through
//! global state. `KeyValueSlot` is the opaque key-value boundary (browser
//! `localStorage` in production, an in-memory map in tests), and
//! `SlotSelectionStore` layers the selection codec on top of it.
//!
//! Malformed slot contents are never an error here: `load` reports them as
//! absent and the reconciler heals the slot by writing the wildcard back.

#[cfg(test)]
#[path = "selection_store_test.rs"]
mod selection_store_test;

#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::{Arc, Mutex};

use crate::state::selection::Selection;

/// Slot key holding the committed selection.
pub const SELECTED_TAPS_KEY: &str = "selected_taps";

/// Opaque string key-value storage.
pub trait KeyValueSlot {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage` slot. No-ops outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSlot;

impl KeyValueSlot for BrowserSlot {
    fn get(&self, key: &str) -> Option<String> {
        super::storage::get_item(key)
    }

    fn set(&self, key: &str, value: &str) {
        if !super::storage::set_item(key, value) {
            leptos::logging::warn!("localStorage unavailable; {key} not persisted");
        }
    }
}

/// Shared in-memory slot. Clones observe the same entries.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemorySlot {
    inner: Arc<Mutex<MemorySlotInner>>,
}

#[cfg(test)]
#[derive(Debug, Default)]
struct MemorySlotInner {
    entries: HashMap<String, String>,
    writes: usize,
}

#[cfg(test)]
impl MemorySlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-populated with one raw entry.
    #[must_use]
    pub fn with_entry(key: &str, raw: &str) -> Self {
        let slot = Self::new();
        if let Ok(mut inner) = slot.inner.lock() {
            inner.entries.insert(key.to_owned(), raw.to_owned());
        }
        slot
    }

    /// Number of `set` calls since construction.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.inner.lock().map_or(0, |inner| inner.writes)
    }

    /// Raw value under `key`, bypassing the selection codec.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.get(key)
    }
}

#[cfg(test)]
impl KeyValueSlot for MemorySlot {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().ok()?.entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.entries.insert(key.to_owned(), value.to_owned());
            inner.writes += 1;
        }
    }
}

/// Load/save contract consumed by the reconciler.
pub trait SelectionStore {
    /// The last committed selection, or `None` if absent or malformed.
    fn load(&self) -> Option<Selection>;
    fn save(&self, selection: &Selection);
}

/// [`SelectionStore`] backed by a [`KeyValueSlot`].
#[derive(Clone, Debug, Default)]
pub struct SlotSelectionStore<K> {
    slot: K,
}

impl<K: KeyValueSlot> SlotSelectionStore<K> {
    pub fn new(slot: K) -> Self {
        Self { slot }
    }
}

impl<K: KeyValueSlot> SelectionStore for SlotSelectionStore<K> {
    fn load(&self) -> Option<Selection> {
        let raw = self.slot.get(SELECTED_TAPS_KEY)?;
        let parsed = Selection::parse_stored(&raw);
        if parsed.is_none() {
            leptos::logging::warn!("discarding malformed {SELECTED_TAPS_KEY} value: {raw}");
        }
        parsed
    }

    fn save(&self, selection: &Selection) {
        self.slot.set(SELECTED_TAPS_KEY, &selection.encode_stored());
    }
}

/// Store used by the running dashboard.
pub type BrowserSelectionStore = SlotSelectionStore<BrowserSlot>;
