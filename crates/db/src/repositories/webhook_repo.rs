//! Repository for the `webhooks` table.

use paratick_core::types::DbId;
use sqlx::PgPool;

use crate::models::webhook::Webhook;

const COLUMNS: &str = "id, url, min_trigger_value, tracks_at_last_trigger, created_at";

/// Provides CRUD and trigger bookkeeping for webhook registrations.
pub struct WebhookRepo;

impl WebhookRepo {
    /// Register a webhook. `tracks_at_registration` seeds the trigger
    /// bookkeeping so only tracks ingested after registration count towards
    /// the threshold.
    pub async fn create(
        pool: &PgPool,
        url: &str,
        min_trigger_value: i32,
        tracks_at_registration: i64,
    ) -> Result<Webhook, sqlx::Error> {
        let query = format!(
            "INSERT INTO webhooks (url, min_trigger_value, tracks_at_last_trigger) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Webhook>(&query)
            .bind(url)
            .bind(min_trigger_value)
            .bind(tracks_at_registration)
            .fetch_one(pool)
            .await
    }

    /// Find a registration by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Webhook>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM webhooks WHERE id = $1");
        sqlx::query_as::<_, Webhook>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all registrations, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Webhook>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM webhooks ORDER BY id");
        sqlx::query_as::<_, Webhook>(&query).fetch_all(pool).await
    }

    /// Delete a registration. Returns the deleted row, if any.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Webhook>, sqlx::Error> {
        let query = format!("DELETE FROM webhooks WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Webhook>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Record that a delivery fired at the given corpus size.
    pub async fn mark_triggered(
        pool: &PgPool,
        id: DbId,
        track_count: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE webhooks SET tracks_at_last_trigger = $2 WHERE id = $1")
            .bind(id)
            .bind(track_count)
            .execute(pool)
            .await
            .map(|_| ())
    }
}
