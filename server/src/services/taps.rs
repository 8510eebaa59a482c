//! Tap service: registration, status reports, and inventory views.
//!
//! DESIGN
//! ======
//! The registry lives in memory behind `AppState::taps`. Liveness is derived
//! at read time from `last_report` and the configured window, so a tap that
//! stops reporting drops offline without any background sweeper.

use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::config::TapSeed;
use crate::state::{AppState, TapRecord};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TapError {
    #[error("tap not found: {0}")]
    NotFound(Uuid),
    #[error("tap name must not be blank")]
    BlankName,
    #[error("tap already registered: {0}")]
    Duplicate(Uuid),
}

/// Inventory entry consumed by the dashboard tap selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TapSummary {
    pub uuid: Uuid,
    pub name: String,
    pub is_online: bool,
}

/// Full view of one tap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TapDetails {
    pub uuid: Uuid,
    pub name: String,
    pub description: String,
    pub is_online: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_report: Option<OffsetDateTime>,
}

impl TapDetails {
    fn from_record(record: &TapRecord, now: OffsetDateTime, window: time::Duration) -> Self {
        Self {
            uuid: record.id,
            name: record.name.clone(),
            description: record.description.clone(),
            is_online: record.is_online(now, window),
            created_at: record.created_at,
            last_report: record.last_report,
        }
    }
}

// =============================================================================
// MUTATIONS
// =============================================================================

/// Register a new tap with a fresh ID.
pub async fn create_tap(
    state: &AppState,
    name: &str,
    description: &str,
    now: OffsetDateTime,
) -> Result<TapDetails, TapError> {
    let record = insert_tap(state, Uuid::new_v4(), name, description, now).await?;
    tracing::info!(tap_id = %record.id, name = %record.name, "tap registered");
    Ok(TapDetails::from_record(&record, now, state.online_window))
}

/// Register every seed, returning how many were inserted.
///
/// All seeds are validated before any is inserted, so an error leaves the
/// registry unchanged.
pub async fn seed_taps(state: &AppState, seeds: &[TapSeed], now: OffsetDateTime) -> Result<usize, TapError> {
    let mut taps = state.taps.write().await;
    let mut staged: Vec<TapRecord> = Vec::with_capacity(seeds.len());
    for seed in seeds {
        let id = seed.uuid.unwrap_or_else(Uuid::new_v4);
        if taps.contains_key(&id) || staged.iter().any(|record| record.id == id) {
            return Err(TapError::Duplicate(id));
        }
        staged.push(build_record(id, &seed.name, &seed.description, now)?);
    }
    let inserted = staged.len();
    taps.extend(staged.into_iter().map(|record| (record.id, record)));
    Ok(inserted)
}

/// Record a status report from tap `id` at `at`.
pub async fn record_report(state: &AppState, id: Uuid, at: OffsetDateTime) -> Result<(), TapError> {
    let mut taps = state.taps.write().await;
    let record = taps.get_mut(&id).ok_or(TapError::NotFound(id))?;
    if record.last_report.is_none_or(|prev| prev < at) {
        record.last_report = Some(at);
    }
    Ok(())
}

async fn insert_tap(
    state: &AppState,
    id: Uuid,
    name: &str,
    description: &str,
    now: OffsetDateTime,
) -> Result<TapRecord, TapError> {
    let record = build_record(id, name, description, now)?;
    let mut taps = state.taps.write().await;
    if taps.contains_key(&id) {
        return Err(TapError::Duplicate(id));
    }
    taps.insert(id, record.clone());
    Ok(record)
}

fn build_record(id: Uuid, name: &str, description: &str, now: OffsetDateTime) -> Result<TapRecord, TapError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TapError::BlankName);
    }
    Ok(TapRecord {
        id,
        name: name.to_owned(),
        description: description.trim().to_owned(),
        created_at: now,
        last_report: None,
    })
}

// =============================================================================
// QUERIES
// =============================================================================

/// All taps, sorted by name then ID, with liveness evaluated at `now`.
pub async fn list_taps(state: &AppState, now: OffsetDateTime) -> Vec<TapSummary> {
    let taps = state.taps.read().await;
    let mut summaries: Vec<TapSummary> = taps
        .values()
        .map(|record| TapSummary {
            uuid: record.id,
            name: record.name.clone(),
            is_online: record.is_online(now, state.online_window),
        })
        .collect();
    summaries.sort_by(|a, b| a.name.cmp(&b.name).then(a.uuid.cmp(&b.uuid)));
    summaries
}

/// Details of tap `id`, with liveness evaluated at `now`.
pub async fn find_tap(state: &AppState, id: Uuid, now: OffsetDateTime) -> Result<TapDetails, TapError> {
    let taps = state.taps.read().await;
    let record = taps.get(&id).ok_or(TapError::NotFound(id))?;
    Ok(TapDetails::from_record(record, now, state.online_window))
}

#[cfg(test)]
#[path = "taps_test.rs"]
mod tests;
