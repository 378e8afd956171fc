//! Watch-progress model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reelbite_core::types::Id;

/// Playback position for one (user, series, episode) triple.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchHistory {
    pub id: Id,
    pub user_id: Id,
    pub series_id: Id,
    pub episode_id: Id,
    /// Seconds into the episode.
    pub last_watched_timestamp: f32,
}

/// DTO for upserting a progress row.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertWatchHistory {
    pub user_id: Id,
    pub series_id: Id,
    pub episode_id: Id,
    pub last_watched_timestamp: f32,
}
