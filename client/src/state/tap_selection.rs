//! Tap selector state machine.
//!
//! DESIGN
//! ======
//! `TapSelection` reconciles the persisted selection against the latest
//! inventory snapshot and owns the two-phase edit protocol: opening the
//! picker copies the committed value into a separate pending buffer, and only
//! `confirm` writes the buffer back to the store.
//!
//! Derived values (label, staleness, picker rows) are recomputed from
//! `(snapshot, committed, pending)` on every read and never cached.
//!
//! ```text
//! Uninitialized --activate--> Loading --inventory--> Ready <--confirm/dismiss-- PickerOpen
//!                                                      |                            ^
//!                                                      +--------open_picker---------+
//! ```
//!
//! CONCURRENCY
//! ===========
//! Inventory reads are issued through `begin_refresh`, which hands out
//! increasing tickets. A result older than the newest applied one is dropped
//! so a slow response never replaces a fresher snapshot.

#[cfg(test)]
#[path = "tap_selection_test.rs"]
mod tap_selection_test;

use crate::net::types::Tap;
use crate::state::selection::Selection;
use crate::util::selection_store::SelectionStore;

pub const LOADING_LABEL: &str = "Tap Selector Loading";
pub const NO_ACCESS_LABEL: &str = "No access to any taps.";
pub const ALL_TAPS_LABEL: &str = "All Taps Selected";

/// Lifecycle phase of the selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorPhase {
    Uninitialized,
    /// Inventory read in flight with no usable snapshot yet.
    Loading,
    Ready,
    /// Ready with an active pending buffer.
    PickerOpen,
}

/// Opaque handle tying an inventory result to the read that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

/// What `apply_inventory` did with a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InventoryOutcome {
    /// Snapshot replaced; selection left as it was.
    Applied,
    /// Snapshot replaced and the committed selection was reset to `All`.
    AppliedWithReset,
    /// Read failed; previous snapshot (if any) kept.
    Failed,
    /// Result belonged to an older read than one already applied.
    Superseded,
}

/// Soft warnings meant to be shown to the user once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionNotice {
    /// None of the previously selected taps are visible anymore.
    ScopeReset { dropped: Vec<String> },
}

impl SelectionNotice {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::ScopeReset { dropped } if dropped.len() == 1 => {
                "The selected tap is no longer available. Showing all taps.".to_owned()
            }
            Self::ScopeReset { dropped } => {
                format!("None of the {} selected taps are available anymore. Showing all taps.", dropped.len())
            }
        }
    }
}

/// One entry in the picker menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerRow {
    pub id: String,
    pub display_name: String,
    pub is_online: bool,
    /// The pending buffer explicitly includes this tap.
    pub is_active: bool,
}

/// Reconciler for the committed tap scope.
#[derive(Debug)]
pub struct TapSelection<S> {
    store: S,
    activated: bool,
    snapshot: Option<Vec<Tap>>,
    committed: Option<Selection>,
    pending: Option<Selection>,
    issued: u64,
    applied: Option<RefreshTicket>,
    last_error: Option<String>,
    notice: Option<SelectionNotice>,
}

impl<S: SelectionStore> TapSelection<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            activated: false,
            snapshot: None,
            committed: None,
            pending: None,
            issued: 0,
            applied: None,
            last_error: None,
            notice: None,
        }
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    /// Bootstrap: load the persisted selection and issue the first read.
    ///
    /// An absent or malformed stored value is replaced by `All` and written
    /// back immediately. Calling this again only issues another read.
    pub fn activate(&mut self) -> RefreshTicket {
        if !self.activated {
            self.activated = true;
            let loaded = self.store.load();
            let committed = match loaded {
                Some(selection) => selection,
                None => {
                    leptos::logging::log!("no usable tap selection stored; defaulting to all taps");
                    self.store.save(&Selection::All);
                    Selection::All
                }
            };
            self.committed = Some(committed);
        }
        self.begin_refresh()
    }

    /// Issue a ticket for a new inventory read.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued += 1;
        RefreshTicket(self.issued)
    }

    /// Fold the result of the read identified by `ticket` into the state.
    pub fn apply_inventory(&mut self, ticket: RefreshTicket, result: Result<Vec<Tap>, String>) -> InventoryOutcome {
        if self.applied.is_some_and(|applied| ticket <= applied) {
            return InventoryOutcome::Superseded;
        }

        let taps = match result {
            Ok(taps) => taps,
            Err(e) => {
                leptos::logging::warn!("tap inventory read failed: {e}");
                self.last_error = Some(e);
                return InventoryOutcome::Failed;
            }
        };

        self.applied = Some(ticket);
        self.last_error = None;
        self.snapshot = Some(taps);

        let Some(committed) = self.committed.clone() else {
            return InventoryOutcome::Applied;
        };
        let reconciled = self.reconcile(committed.clone());
        if reconciled == committed {
            return InventoryOutcome::Applied;
        }

        self.store.save(&reconciled);
        self.committed = Some(reconciled);
        if self.pending.is_some() {
            self.pending = Some(Selection::All);
        }
        InventoryOutcome::AppliedWithReset
    }

    /// Copy the committed selection into the pending buffer.
    ///
    /// Returns `false` when the picker is unavailable (still loading, no
    /// accessible taps, or already open).
    pub fn open_picker(&mut self) -> bool {
        if self.phase() != SelectorPhase::Ready || !self.picker_enabled() {
            return false;
        }
        self.pending.clone_from(&self.committed);
        true
    }

    /// Toggle `id` in the pending buffer.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        *pending = pending.toggled(id);
        true
    }

    /// Replace the pending buffer with `All`.
    pub fn select_all(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        *pending = Selection::All;
        true
    }

    /// Persist the pending buffer and make it the committed selection.
    ///
    /// The buffer is reconciled against the current snapshot first, so the
    /// store is written exactly once.
    pub fn confirm(&mut self) -> Option<Selection> {
        let pending = self.pending.take()?;
        let next = self.reconcile(pending);
        self.store.save(&next);
        self.committed = Some(next.clone());
        Some(next)
    }

    /// Drop the pending buffer without saving.
    pub fn dismiss(&mut self) -> bool {
        self.pending.take().is_some()
    }

    // =========================================================================
    // DERIVED STATE
    // =========================================================================

    #[must_use]
    pub fn phase(&self) -> SelectorPhase {
        if !self.activated {
            SelectorPhase::Uninitialized
        } else if self.snapshot.is_none() || self.committed.is_none() {
            SelectorPhase::Loading
        } else if self.pending.is_some() {
            SelectorPhase::PickerOpen
        } else {
            SelectorPhase::Ready
        }
    }

    #[must_use]
    pub fn committed(&self) -> Option<&Selection> {
        self.committed.as_ref()
    }

    #[must_use]
    pub fn pending(&self) -> Option<&Selection> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&[Tap]> {
        self.snapshot.as_deref()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Taken notices are returned once.
    pub fn take_notice(&mut self) -> Option<SelectionNotice> {
        self.notice.take()
    }

    #[must_use]
    pub fn picker_enabled(&self) -> bool {
        self.snapshot.as_ref().is_some_and(|taps| !taps.is_empty()) && self.committed.is_some()
    }

    #[must_use]
    pub fn display_label(&self) -> String {
        match (self.committed.as_ref(), self.snapshot.as_deref()) {
            (Some(committed), Some(taps)) => display_label(committed, taps),
            _ => LOADING_LABEL.to_owned(),
        }
    }

    #[must_use]
    pub fn has_stale_member(&self) -> bool {
        match (self.committed.as_ref(), self.snapshot.as_deref()) {
            (Some(committed), Some(taps)) => has_stale_member(committed, taps),
            _ => false,
        }
    }

    /// Picker menu rows in snapshot order, marked against the pending buffer.
    #[must_use]
    pub fn picker_rows(&self) -> Vec<PickerRow> {
        let Some(taps) = self.snapshot.as_deref() else {
            return Vec::new();
        };
        let pending = self.pending.as_ref().or(self.committed.as_ref());
        taps.iter()
            .map(|tap| PickerRow {
                id: tap.id.clone(),
                display_name: tap.display_name.clone(),
                is_online: tap.is_online,
                is_active: pending.is_some_and(|sel| sel.explicitly_includes(&tap.id)),
            })
            .collect()
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    /// Reset `selection` to `All` when it names no tap in the snapshot.
    fn reconcile(&mut self, selection: Selection) -> Selection {
        let Some(taps) = self.snapshot.as_deref() else {
            return selection;
        };
        let Selection::Subset(ids) = &selection else {
            return selection;
        };
        if ids.iter().any(|id| taps.iter().any(|tap| &tap.id == id)) {
            return selection;
        }
        let dropped: Vec<String> = ids.iter().cloned().collect();
        leptos::logging::warn!("none of the selected taps are visible ({}); resetting to all taps", dropped.join(","));
        self.notice = Some(SelectionNotice::ScopeReset { dropped });
        Selection::All
    }
}

/// Button label for `committed` resolved against `taps`.
#[must_use]
pub fn display_label(committed: &Selection, taps: &[Tap]) -> String {
    if taps.is_empty() {
        return NO_ACCESS_LABEL.to_owned();
    }
    match committed {
        Selection::All => ALL_TAPS_LABEL.to_owned(),
        Selection::Subset(ids) if ids.len() == 1 => "1 Tap Selected".to_owned(),
        Selection::Subset(ids) => format!("{} Taps Selected", ids.len()),
    }
}

/// Whether any tap covered by `committed` is offline or missing from `taps`.
#[must_use]
pub fn has_stale_member(committed: &Selection, taps: &[Tap]) -> bool {
    let covered_offline = taps.iter().any(|tap| committed.covers(&tap.id) && !tap.is_online);
    let member_missing = committed
        .ids()
        .is_some_and(|ids| ids.iter().any(|id| !taps.iter().any(|tap| &tap.id == id)));
    covered_offline || member_missing
}
