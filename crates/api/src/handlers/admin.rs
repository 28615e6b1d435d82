//! Administrative handlers (`/admin/api`).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use paratick_db::repositories::TrackRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /admin/api/tracks_count
pub async fn tracks_count(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let count = TrackRepo::count(&state.pool).await?;
    Ok(Json(DataResponse { data: count }))
}

/// DELETE /admin/api/tracks
///
/// Bulk reset: removes every track and answers with the number removed.
/// Identifier assignment continues where it left off; issued ids are never
/// reused.
pub async fn delete_all_tracks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let removed = TrackRepo::delete_all(&state.pool).await?;
    tracing::info!(removed, "All tracks removed");
    Ok(Json(DataResponse { data: removed }))
}
