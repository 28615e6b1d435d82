//! Handlers for the `/paragliding/api/ticker` resource.
//!
//! Each request re-derives its answer from a fresh repository read; the
//! windowing itself is pure (`paratick_core::ticker`).

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use paratick_core::cursor;
use paratick_core::query::clamp_limit;
use paratick_core::ticker::{self, TickerWindow};
use paratick_core::types::Timestamp;
use paratick_db::repositories::TrackRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::query::TickerParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload for `/ticker/latest`. `null` when the store is empty.
#[derive(Debug, Serialize)]
pub struct LatestResponse {
    pub latest: Option<Timestamp>,
}

/// GET /paragliding/api/ticker/latest
pub async fn latest(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = TrackRepo::list_entries(&state.pool).await?;
    Ok(Json(DataResponse {
        data: LatestResponse {
            latest: ticker::latest_timestamp(&entries),
        },
    }))
}

/// GET /paragliding/api/ticker?limit=
///
/// Full window with no cursor: paging starts at the oldest track.
pub async fn window(
    State(state): State<AppState>,
    Query(params): Query<TickerParams>,
) -> AppResult<impl IntoResponse> {
    let window = compute_window(&state, None, params).await?;
    Ok(Json(DataResponse { data: window }))
}

/// GET /paragliding/api/ticker/{timestamp}?limit=
///
/// Window relative to a client cursor in `DD.MM.YYYY HH:MM:SS.fff` form.
/// An unparseable cursor is rejected with 400 before any repository read.
pub async fn window_from(
    State(state): State<AppState>,
    Path(raw_cursor): Path<String>,
    Query(params): Query<TickerParams>,
) -> AppResult<impl IntoResponse> {
    let cursor = cursor::parse_cursor(&raw_cursor)?;
    let window = compute_window(&state, Some(cursor), params).await?;
    Ok(Json(DataResponse { data: window }))
}

async fn compute_window(
    state: &AppState,
    cursor: Option<Timestamp>,
    params: TickerParams,
) -> AppResult<TickerWindow> {
    let limit = clamp_limit(params.limit, ticker::DEFAULT_PAGE_SIZE, ticker::MAX_PAGE_SIZE);
    let entries = TrackRepo::list_entries(&state.pool).await?;
    Ok(ticker::window(&entries, cursor, limit))
}
