//! Repository for the `tracks` table and its shared identifier counter.

use paratick_core::ticker::TickerEntry;
use paratick_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::track::{NewTrack, Track};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, source_url, recorded_at, pilot, glider, glider_id, created_at";

/// Provides dedup-aware insertion and lookups for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a track unless its `source_url` is already known.
    ///
    /// Returns the stored row and whether this call created it. Identifier
    /// assignment goes through the single `track_counter` row: the increment
    /// takes that row's lock, which is held until commit and serializes every
    /// new-track insert. The existence re-check runs after the increment,
    /// under that lock, so a lost race rolls the increment back and returns
    /// the winner's row. The counter advances exactly once per new track and
    /// a reserved id is never left without a persisted track.
    pub async fn insert_if_absent(
        pool: &PgPool,
        input: &NewTrack,
    ) -> Result<(Track, bool), sqlx::Error> {
        // Fast path: duplicates never touch the counter.
        if let Some(existing) = Self::find_by_source_url(pool, &input.source_url).await? {
            return Ok((existing, false));
        }

        let mut tx = pool.begin().await?;

        let (id,): (DbId,) = sqlx::query_as(
            "UPDATE track_counter SET last_id = last_id + 1 WHERE id = 1 RETURNING last_id",
        )
        .fetch_one(&mut *tx)
        .await?;

        // Re-check under the counter lock: a concurrent insert of the same
        // url has either committed by now or will block behind us.
        let find = format!("SELECT {COLUMNS} FROM tracks WHERE source_url = $1");
        if let Some(existing) = sqlx::query_as::<_, Track>(&find)
            .bind(&input.source_url)
            .fetch_optional(&mut *tx)
            .await?
        {
            tx.rollback().await?;
            return Ok((existing, false));
        }

        let insert = format!(
            "INSERT INTO tracks (id, source_url, recorded_at, pilot, glider, glider_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        let track = sqlx::query_as::<_, Track>(&insert)
            .bind(id)
            .bind(&input.source_url)
            .bind(input.recorded_at)
            .bind(&input.pilot)
            .bind(&input.glider)
            .bind(&input.glider_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(track_id = track.id, url = %track.source_url, "Track inserted");
        Ok((track, true))
    }

    /// Find a track by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a track by its source url (the dedup key).
    pub async fn find_by_source_url(
        pool: &PgPool,
        source_url: &str,
    ) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE source_url = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(source_url)
            .fetch_optional(pool)
            .await
    }

    /// List all tracks ordered by `(recorded_at, id)`.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks ORDER BY recorded_at, id");
        sqlx::query_as::<_, Track>(&query).fetch_all(pool).await
    }

    /// List all track ids, ascending.
    pub async fn list_ids(pool: &PgPool) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as("SELECT id FROM tracks ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Project the corpus onto the `(id, recorded_at)` pairs windowing needs.
    pub async fn list_entries(pool: &PgPool) -> Result<Vec<TickerEntry>, sqlx::Error> {
        let rows: Vec<(DbId, Timestamp)> = sqlx::query_as("SELECT id, recorded_at FROM tracks")
            .fetch_all(pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|(id, recorded_at)| TickerEntry { id, recorded_at })
            .collect())
    }

    /// Number of distinct tracks currently stored.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tracks")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Remove every track (administrative reset). Returns the number removed.
    ///
    /// The counter is deliberately left untouched: issued identifiers are
    /// never reused, even after a reset.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tracks").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
