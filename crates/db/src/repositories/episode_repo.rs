//! Repository for the `episodes` table (read-only catalog data).

use sqlx::PgPool;

use reelbite_core::types::Id;

use crate::models::episode::Episode;

const COLUMNS: &str = "id, series_id, episode_number, title, video_url, is_free, cost_in_coins";

/// Read-only lookups over the episode catalog.
pub struct EpisodeRepo;

impl EpisodeRepo {
    /// Find an episode by ID.
    pub async fn find_by_id(pool: &PgPool, id: Id) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM episodes WHERE id = $1");
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All episodes of a series, ordered by episode number.
    pub async fn list_by_series(pool: &PgPool, series_id: Id) -> Result<Vec<Episode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM episodes
             WHERE series_id = $1
             ORDER BY episode_number ASC"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(series_id)
            .fetch_all(pool)
            .await
    }

    /// Find an episode by its series and 1-based number.
    pub async fn find_by_series_and_number(
        pool: &PgPool,
        series_id: Id,
        episode_number: i32,
    ) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM episodes
             WHERE series_id = $1 AND episode_number = $2"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(series_id)
            .bind(episode_number)
            .fetch_optional(pool)
            .await
    }
}
