//! Repository for the `series` table (read-only catalog browsing).

use sqlx::PgPool;

use reelbite_core::types::Id;

use crate::models::series::Series;

const COLUMNS: &str = "id, title, synopsis, poster_url, is_coming_soon, release_date, \
                        genre, rating, year, tags, rank, is_new";

/// Read-only lookups over the series catalog.
pub struct SeriesRepo;

impl SeriesRepo {
    /// Find a series by ID.
    pub async fn find_by_id(pool: &PgPool, id: Id) -> Result<Option<Series>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM series WHERE id = $1");
        sqlx::query_as::<_, Series>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Released series ordered by rating (best first). Ranked and
    /// new-flagged series have their own rows and are excluded here.
    pub async fn list_popular(pool: &PgPool) -> Result<Vec<Series>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM series
             WHERE NOT is_coming_soon AND rank IS NULL AND NOT is_new
             ORDER BY rating DESC NULLS LAST, title ASC
             LIMIT 20"
        );
        sqlx::query_as::<_, Series>(&query).fetch_all(pool).await
    }

    /// Series flagged as new, most recent year first.
    pub async fn list_new(pool: &PgPool) -> Result<Vec<Series>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM series
             WHERE is_new AND NOT is_coming_soon
             ORDER BY year DESC NULLS LAST, title ASC
             LIMIT 20"
        );
        sqlx::query_as::<_, Series>(&query).fetch_all(pool).await
    }

    /// Editorially ranked series (rank 1 is the top spot).
    pub async fn list_ranking(pool: &PgPool) -> Result<Vec<Series>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM series
             WHERE rank IS NOT NULL AND NOT is_coming_soon
             ORDER BY rank ASC
             LIMIT 10"
        );
        sqlx::query_as::<_, Series>(&query).fetch_all(pool).await
    }

    /// Kumawood category row: released series carrying any of the
    /// Historical/Cultural tags, best rated first.
    pub async fn list_kumawood(pool: &PgPool) -> Result<Vec<Series>, sqlx::Error> {
        Self::list_by_tags(pool, &["Historical", "Cultural"]).await
    }

    /// Naija category row: released series carrying any of the
    /// Urban/Business/Political tags, best rated first.
    pub async fn list_naija(pool: &PgPool) -> Result<Vec<Series>, sqlx::Error> {
        Self::list_by_tags(pool, &["Urban", "Business", "Political"]).await
    }

    async fn list_by_tags(pool: &PgPool, tags: &[&str]) -> Result<Vec<Series>, sqlx::Error> {
        let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        let query = format!(
            "SELECT {COLUMNS} FROM series
             WHERE NOT is_coming_soon AND tags && $1
             ORDER BY rating DESC NULLS LAST, title ASC
             LIMIT 20"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(tags)
            .fetch_all(pool)
            .await
    }

    /// Upcoming series for the coming-soon carousel.
    pub async fn list_coming_soon(pool: &PgPool) -> Result<Vec<Series>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM series
             WHERE is_coming_soon
             ORDER BY release_date ASC NULLS LAST, title ASC"
        );
        sqlx::query_as::<_, Series>(&query).fetch_all(pool).await
    }

    /// Case-insensitive title substring search over released series.
    pub async fn search_by_title(pool: &PgPool, term: &str) -> Result<Vec<Series>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM series
             WHERE NOT is_coming_soon AND title ILIKE '%' || $1 || '%'
             ORDER BY title ASC
             LIMIT 20"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(term)
            .fetch_all(pool)
            .await
    }
}
