//! Handlers for webhook registrations (`/paragliding/api/webhook`).
//!
//! Registration and inspection only; delivery happens in
//! [`crate::notifier`] after new-track inserts.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use paratick_core::error::CoreError;
use paratick_core::types::DbId;
use paratick_db::models::webhook::CreateWebhook;
use paratick_db::repositories::{TrackRepo, WebhookRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /paragliding/api/webhook/new_track
///
/// Register a webhook. `min_trigger_value` defaults to 1 (fire on every new
/// track); the trigger bookkeeping is seeded with the current corpus size so
/// only tracks ingested after registration count.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<CreateWebhook>,
) -> AppResult<impl IntoResponse> {
    let url = input.url.trim();
    if url.is_empty() {
        return Err(AppError::Core(CoreError::MalformedInput(
            "webhook url must not be empty".into(),
        )));
    }
    let min_trigger_value = input.min_trigger_value.unwrap_or(1);
    if min_trigger_value < 1 {
        return Err(AppError::Core(CoreError::MalformedInput(
            "min_trigger_value must be at least 1".into(),
        )));
    }

    let count = TrackRepo::count(&state.pool).await?;
    let webhook = WebhookRepo::create(&state.pool, url, min_trigger_value, count).await?;

    tracing::info!(webhook_id = webhook.id, url = %webhook.url, "Webhook registered");
    Ok((StatusCode::CREATED, Json(DataResponse { data: webhook })))
}

/// GET /paragliding/api/webhook/new_track/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let webhook = WebhookRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Webhook",
            id,
        }))?;
    Ok(Json(DataResponse { data: webhook }))
}

/// DELETE /paragliding/api/webhook/new_track/{id}
///
/// Remove a registration; answers with the removed row.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let webhook = WebhookRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Webhook",
            id,
        }))?;

    tracing::info!(webhook_id = webhook.id, "Webhook removed");
    Ok(Json(DataResponse { data: webhook }))
}
