//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the registry of known taps and the liveness window used to decide
//! whether a tap counts as online.

use std::collections::HashMap;
use std::sync::Arc;

use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

// =============================================================================
// TAP RECORD
// =============================================================================

/// In-memory representation of a registered tap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: OffsetDateTime,
    /// Time of the most recent status report, if the tap ever reported.
    pub last_report: Option<OffsetDateTime>,
}

impl TapRecord {
    /// A tap is online when it reported within `window` before `now`.
    #[must_use]
    pub fn is_online(&self, now: OffsetDateTime, window: time::Duration) -> bool {
        self.last_report.is_some_and(|at| at > now - window)
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub taps: Arc<RwLock<HashMap<Uuid, TapRecord>>>,
    pub online_window: time::Duration,
}

impl AppState {
    #[must_use]
    pub fn new(online_window: time::Duration) -> Self {
        Self { taps: Arc::new(RwLock::new(HashMap::new())), online_window }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Create a test `AppState` with the default two-minute online window.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(time::Duration::minutes(2))
    }

    /// Insert a tap directly and return its ID.
    pub async fn seed_tap(state: &AppState, name: &str, last_report: Option<OffsetDateTime>) -> Uuid {
        let id = Uuid::new_v4();
        let record = TapRecord {
            id,
            name: name.to_owned(),
            description: String::new(),
            created_at: OffsetDateTime::UNIX_EPOCH,
            last_report,
        };
        state.taps.write().await.insert(id, record);
        id
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
