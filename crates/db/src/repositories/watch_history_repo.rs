//! Repository for the `watch_history` table.

use sqlx::PgPool;

use crate::models::watch_history::{UpsertWatchHistory, WatchHistory};

const COLUMNS: &str = "id, user_id, series_id, episode_id, last_watched_timestamp";

/// Playback-position persistence. One row per (user, series, episode),
/// overwritten on every progress report.
pub struct WatchHistoryRepo;

impl WatchHistoryRepo {
    /// Insert or update the progress row for the triple.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertWatchHistory,
    ) -> Result<WatchHistory, sqlx::Error> {
        let query = format!(
            "INSERT INTO watch_history (user_id, series_id, episode_id, last_watched_timestamp)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (user_id, series_id, episode_id)
             DO UPDATE SET last_watched_timestamp = EXCLUDED.last_watched_timestamp
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WatchHistory>(&query)
            .bind(input.user_id)
            .bind(input.series_id)
            .bind(input.episode_id)
            .bind(input.last_watched_timestamp)
            .fetch_one(pool)
            .await
    }
}
