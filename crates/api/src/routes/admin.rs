use axum::routing::{delete, get};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/admin/api` route tree.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tracks_count", get(handlers::admin::tracks_count))
        .route("/tracks", delete(handlers::admin::delete_all_tracks))
}
