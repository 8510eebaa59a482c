//! Tap scope value shared by every dashboard view.
//!
//! DESIGN
//! ======
//! A selection is either the wildcard (`All`) or an explicit, non-empty set
//! of tap ids. There is no empty subset: an empty scope would read the same
//! as "nothing scoped", so removing the last member collapses to `All`.
//!
//! The stored form mirrors the wire convention of the persisted slot: the
//! JSON string `"*"` for the wildcard, or a JSON array of id strings.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Serialized marker for the wildcard selection.
pub const WILDCARD_MARKER: &str = "*";

/// Which taps the dashboard is scoped to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// Every tap, including ones that appear later.
    #[default]
    All,
    /// Exactly these taps. Never empty.
    Subset(BTreeSet<String>),
}

impl Selection {
    /// Build an explicit subset, or `None` when `ids` is empty.
    pub fn subset<I, S>(ids: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: BTreeSet<String> = ids.into_iter().map(Into::into).collect();
        if ids.is_empty() { None } else { Some(Self::Subset(ids)) }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Member ids of an explicit subset, sorted. `None` for the wildcard.
    #[must_use]
    pub fn ids(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::All => None,
            Self::Subset(ids) => Some(ids),
        }
    }

    /// Whether `id` is an explicit member. The wildcard has no explicit members.
    #[must_use]
    pub fn explicitly_includes(&self, id: &str) -> bool {
        self.ids().is_some_and(|ids| ids.contains(id))
    }

    /// Whether a tap with `id` falls inside this scope.
    #[must_use]
    pub fn covers(&self, id: &str) -> bool {
        match self {
            Self::All => true,
            Self::Subset(ids) => ids.contains(id),
        }
    }

    /// Apply one picker toggle.
    ///
    /// Starting from `All`, a toggle begins a fresh subset holding only `id`.
    /// Removing the last member of a subset yields `All`.
    #[must_use]
    pub fn toggled(&self, id: &str) -> Self {
        match self {
            Self::All => Self::Subset(BTreeSet::from([id.to_owned()])),
            Self::Subset(ids) => {
                let mut next = ids.clone();
                if !next.remove(id) {
                    next.insert(id.to_owned());
                }
                if next.is_empty() { Self::All } else { Self::Subset(next) }
            }
        }
    }

    /// Value other views pass as their `taps` query parameter.
    #[must_use]
    pub fn query_value(&self) -> String {
        match self {
            Self::All => WILDCARD_MARKER.to_owned(),
            Self::Subset(ids) => ids.iter().map(String::as_str).collect::<Vec<_>>().join(","),
        }
    }

    /// Encode into the persisted slot representation.
    #[must_use]
    pub fn to_stored(&self) -> StoredSelection {
        match self {
            Self::All => StoredSelection::Marker(WILDCARD_MARKER.to_owned()),
            Self::Subset(ids) => StoredSelection::Ids(ids.iter().cloned().collect()),
        }
    }

    /// Decode from the persisted slot representation.
    ///
    /// Returns `None` for an unknown marker string or an empty id list.
    #[must_use]
    pub fn from_stored(stored: StoredSelection) -> Option<Self> {
        match stored {
            StoredSelection::Marker(marker) if marker == WILDCARD_MARKER => Some(Self::All),
            StoredSelection::Marker(_) => None,
            StoredSelection::Ids(ids) => Self::subset(ids),
        }
    }

    /// Parse a raw slot value. Any malformed input is `None`.
    #[must_use]
    pub fn parse_stored(raw: &str) -> Option<Self> {
        let stored = serde_json::from_str::<StoredSelection>(raw).ok()?;
        Self::from_stored(stored)
    }

    /// Serialize to a raw slot value.
    #[must_use]
    pub fn encode_stored(&self) -> String {
        serde_json::to_string(&self.to_stored()).unwrap_or_else(|_| format!("\"{WILDCARD_MARKER}\""))
    }
}

/// Persisted shape of a [`Selection`]: `"*"` or `["id", ...]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredSelection {
    Marker(String),
    Ids(Vec<String>),
}
