//! Route tree builders.

pub mod admin;
pub mod health;
pub mod ticker;
pub mod track;
pub mod webhook;

use axum::Router;

use crate::state::AppState;

/// Build the `/paragliding/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /track                      POST ingest, GET all ids
/// /track/{id}                 GET full metadata
/// /track/{id}/{field}         GET single field
///
/// /ticker                     GET window (no cursor)
/// /ticker/latest              GET latest timestamp
/// /ticker/{timestamp}         GET window from cursor
///
/// /webhook/new_track          POST register
/// /webhook/new_track/{id}     GET, DELETE
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/track", track::router())
        .nest("/ticker", ticker::router())
        .nest("/webhook", webhook::router())
}
