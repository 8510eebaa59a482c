//! Committed tap scope published to the rest of the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The tap selector is the only writer. Every other view reads the latest
//! value from context and scopes its own queries with `query_value`. Only the
//! latest value matters; there is no history.
//!
//! The scope lives in `App` context and outlives any one selector mount, so
//! publication is keyed on the value itself rather than on a counter owned by
//! one reconciler.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use crate::state::selection::Selection;

/// Latest committed selection plus a count of published changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TapScope {
    /// `None` until the selector has bootstrapped.
    pub selection: Option<Selection>,
    pub revision: u64,
}

impl TapScope {
    /// Replace the published value when it differs. Returns whether it changed.
    pub fn publish(&mut self, selection: &Selection) -> bool {
        if self.selection.as_ref() == Some(selection) {
            return false;
        }
        self.selection = Some(selection.clone());
        self.revision += 1;
        true
    }

    /// `taps` query parameter for scoped requests, once known.
    #[must_use]
    pub fn query_value(&self) -> Option<String> {
        self.selection.as_ref().map(Selection::query_value)
    }
}
