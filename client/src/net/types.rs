//! Wire DTOs for the tap inventory endpoint.
//!
//! DESIGN
//! ======
//! Field names follow the server JSON (`uuid`, `name`, `is_online`) while the
//! Rust side uses the dashboard's own vocabulary (`id`, `display_name`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One sensing device as seen in a single inventory read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tap {
    /// Stable tap identifier (UUID string).
    #[serde(rename = "uuid")]
    pub id: String,
    /// Human-readable tap name.
    #[serde(rename = "name")]
    pub display_name: String,
    /// Whether the tap reported recently enough to count as live.
    pub is_online: bool,
}

/// Response body of `GET /api/taps`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapListResponse {
    #[serde(default)]
    pub count: usize,
    pub taps: Vec<Tap>,
}
