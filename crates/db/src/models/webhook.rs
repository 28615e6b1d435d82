//! Webhook registration model and DTOs.

use paratick_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `webhooks` table.
///
/// `tracks_at_last_trigger` records the corpus size the last time this
/// registration fired (or the size at registration); the notifier fires again
/// once `count - tracks_at_last_trigger >= min_trigger_value`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Webhook {
    pub id: DbId,
    pub url: String,
    pub min_trigger_value: i32,
    pub tracks_at_last_trigger: i64,
    pub created_at: Timestamp,
}

/// DTO for registering a webhook.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWebhook {
    pub url: String,
    pub min_trigger_value: Option<i32>,
}
