//! Handlers for the `/paragliding/api/track` resource.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use paratick_core::error::CoreError;
use paratick_core::types::DbId;
use paratick_db::models::track::NewTrack;
use paratick_db::repositories::TrackRepo;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Ingest request body.
#[derive(Debug, Deserialize)]
pub struct IngestTrack {
    pub url: String,
}

/// Ingest response payload: the assigned (or pre-existing) identifier.
#[derive(Debug, Serialize)]
pub struct IngestedTrack {
    pub id: DbId,
}

/// POST /paragliding/api/track
///
/// Ingest a track by source url. Idempotent: a url that is already known
/// returns the existing id with 200; a new one is fetched, parsed, stored,
/// and answered with 201.
pub async fn ingest(
    State(state): State<AppState>,
    Json(input): Json<IngestTrack>,
) -> AppResult<impl IntoResponse> {
    let url = input.url.trim();
    if url.is_empty() {
        return Err(AppError::Core(CoreError::MalformedInput(
            "url must not be empty".into(),
        )));
    }

    // Cheap read-only probe so duplicates skip the download; the
    // authoritative dedup check is the atomic insert below.
    if let Some(existing) = TrackRepo::find_by_source_url(&state.pool, url).await? {
        return Ok((
            StatusCode::OK,
            Json(DataResponse {
                data: IngestedTrack { id: existing.id },
            }),
        ));
    }

    let headers = state.fetcher.fetch_headers(url).await?;
    let new_track = NewTrack {
        source_url: url.to_string(),
        recorded_at: headers.recorded_at,
        pilot: headers.pilot,
        glider: headers.glider,
        glider_id: headers.glider_id,
    };
    let (track, created) = TrackRepo::insert_if_absent(&state.pool, &new_track).await?;

    if created {
        tracing::info!(track_id = track.id, url = %track.source_url, "Track ingested");

        let notifier = Arc::clone(&state.notifier);
        let pool = state.pool.clone();
        let track_id = track.id;
        tokio::spawn(async move { notifier.track_ingested(&pool, track_id).await });
    }

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((
        status,
        Json(DataResponse {
            data: IngestedTrack { id: track.id },
        }),
    ))
}

/// GET /paragliding/api/track
///
/// All track ids, ascending.
pub async fn list_ids(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let ids = TrackRepo::list_ids(&state.pool).await?;
    Ok(Json(DataResponse { data: ids }))
}

/// GET /paragliding/api/track/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let track = TrackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Track",
            id,
        }))?;
    Ok(Json(DataResponse { data: track }))
}

/// GET /paragliding/api/track/{id}/{field}
///
/// Single metadata field: `pilot`, `glider`, `glider_id`, `H_date`, or
/// `track_src_url`.
pub async fn get_field(
    State(state): State<AppState>,
    Path((id, field)): Path<(DbId, String)>,
) -> AppResult<impl IntoResponse> {
    let track = TrackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Track",
            id,
        }))?;

    let value = match field.as_str() {
        "pilot" => json!(track.pilot),
        "glider" => json!(track.glider),
        "glider_id" => json!(track.glider_id),
        "H_date" => json!(track.recorded_at),
        "track_src_url" => json!(track.source_url),
        other => {
            return Err(AppError::BadRequest(format!("unknown track field '{other}'")));
        }
    };
    Ok(Json(DataResponse { data: value }))
}
