use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(handlers::track::ingest).get(handlers::track::list_ids),
        )
        .route("/{id}", get(handlers::track::get))
        .route("/{id}/{field}", get(handlers::track::get_field))
}
