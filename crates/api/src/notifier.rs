//! Outbound webhook delivery.
//!
//! Fire-and-forget: after each *new* track the ingest handler spawns
//! [`Notifier::track_ingested`], so delivery latency and failures never reach
//! the ingesting client. Threshold bookkeeping lives on the registration row
//! (`tracks_at_last_trigger`); the corpus count itself stays the repository's
//! business.

use paratick_core::types::DbId;
use paratick_db::repositories::{TrackRepo, WebhookRepo};
use paratick_db::DbPool;
use serde::Serialize;

/// JSON body POSTed to registered webhook urls.
#[derive(Debug, Serialize)]
struct NewTrackPayload {
    latest_track_id: DbId,
    track_count: i64,
    content: String,
}

/// Delivers new-track notifications to registered webhooks.
pub struct Notifier {
    client: reqwest::Client,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Check every registration against the current corpus size and deliver
    /// where the trigger threshold is crossed.
    pub async fn track_ingested(&self, pool: &DbPool, track_id: DbId) {
        let count = match TrackRepo::count(pool).await {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping webhook delivery, track count failed");
                return;
            }
        };
        let webhooks = match WebhookRepo::list(pool).await {
            Ok(webhooks) => webhooks,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping webhook delivery, listing failed");
                return;
            }
        };

        for webhook in webhooks {
            let new_tracks = count - webhook.tracks_at_last_trigger;
            if new_tracks < i64::from(webhook.min_trigger_value) {
                continue;
            }

            let payload = NewTrackPayload {
                latest_track_id: track_id,
                track_count: count,
                content: format!("{new_tracks} new track(s), latest id {track_id}"),
            };

            match self.client.post(&webhook.url).json(&payload).send().await {
                Ok(response) if response.status().is_success() => {
                    tracing::info!(webhook_id = webhook.id, url = %webhook.url, "Webhook delivered");
                    if let Err(e) = WebhookRepo::mark_triggered(pool, webhook.id, count).await {
                        tracing::warn!(webhook_id = webhook.id, error = %e, "Failed to record webhook trigger");
                    }
                }
                Ok(response) => {
                    tracing::warn!(
                        webhook_id = webhook.id,
                        status = %response.status(),
                        "Webhook delivery rejected"
                    );
                }
                Err(e) => {
                    tracing::warn!(webhook_id = webhook.id, error = %e, "Webhook delivery failed");
                }
            }
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
