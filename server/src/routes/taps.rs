//! Tap inventory routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::services::taps::{self, TapDetails, TapError, TapSummary};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TapListResponse {
    pub count: usize,
    pub taps: Vec<TapSummary>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTapRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

pub(crate) fn tap_error_to_status(err: TapError) -> StatusCode {
    match err {
        TapError::NotFound(_) => StatusCode::NOT_FOUND,
        TapError::BlankName => StatusCode::BAD_REQUEST,
        TapError::Duplicate(_) => StatusCode::CONFLICT,
    }
}

/// `GET /api/taps`: every tap visible to this session, with liveness.
pub async fn list_taps(State(state): State<AppState>) -> Json<TapListResponse> {
    let taps = taps::list_taps(&state, OffsetDateTime::now_utc()).await;
    Json(TapListResponse { count: taps.len(), taps })
}

/// `GET /api/taps/:id`: details of one tap.
pub async fn show_tap(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<TapDetails>, StatusCode> {
    taps::find_tap(&state, id, OffsetDateTime::now_utc())
        .await
        .map(Json)
        .map_err(tap_error_to_status)
}

/// `POST /api/taps`: register a tap.
pub async fn create_tap(
    State(state): State<AppState>,
    Json(body): Json<CreateTapRequest>,
) -> Result<(StatusCode, Json<TapDetails>), StatusCode> {
    let details = taps::create_tap(&state, &body.name, &body.description, OffsetDateTime::now_utc())
        .await
        .map_err(tap_error_to_status)?;
    Ok((StatusCode::CREATED, Json(details)))
}

/// `POST /api/taps/:id/status`: heartbeat from a tap.
pub async fn report_status(State(state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    match taps::record_report(&state, id, OffsetDateTime::now_utc()).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => {
            tracing::warn!(tap_id = %id, error = %e, "status report rejected");
            tap_error_to_status(e)
        }
    }
}

#[cfg(test)]
#[path = "taps_test.rs"]
mod tests;
