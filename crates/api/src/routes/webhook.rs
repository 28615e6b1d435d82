use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new_track", post(handlers::webhook::register))
        .route(
            "/new_track/{id}",
            get(handlers::webhook::get).delete(handlers::webhook::delete),
        )
}
