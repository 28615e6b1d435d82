//! Track entity model and DTOs.
//!
//! A track is created exactly once, on first successful dedup-checked insert,
//! and never mutated afterwards. `source_url` is the dedup key; `recorded_at`
//! is the flight date taken from the file's own headers, not ingestion time.

use paratick_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `tracks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Track {
    pub id: DbId,
    pub source_url: String,
    pub recorded_at: Timestamp,
    pub pilot: Option<String>,
    pub glider: Option<String>,
    pub glider_id: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a track. The boundary validates that `source_url` is
/// non-empty before building one of these.
#[derive(Debug, Clone)]
pub struct NewTrack {
    pub source_url: String,
    pub recorded_at: Timestamp,
    pub pilot: Option<String>,
    pub glider: Option<String>,
    pub glider_id: Option<String>,
}
