//! Handler for playback progress reporting.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use reelbite_db::models::watch_history::UpsertWatchHistory;
use reelbite_db::repositories::WatchHistoryRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/watch-history
///
/// Upsert the playback position for a (user, series, episode) triple.
/// The player calls this on an interval, so the write is idempotent.
pub async fn upsert(
    State(state): State<AppState>,
    Json(input): Json<UpsertWatchHistory>,
) -> AppResult<impl IntoResponse> {
    let row = WatchHistoryRepo::upsert(&state.pool, &input).await?;
    Ok(Json(row))
}
