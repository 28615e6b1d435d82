use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    // `/latest` is matched before the `{timestamp}` capture.
    Router::new()
        .route("/", get(handlers::ticker::window))
        .route("/latest", get(handlers::ticker::latest))
        .route("/{timestamp}", get(handlers::ticker::window_from))
}
