//! Episode catalog model.

use serde::Serialize;
use sqlx::FromRow;

use reelbite_core::types::{Coins, Id};

/// Full episode row. Immutable reference data for the unlock engine.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: Id,
    pub series_id: Id,
    /// 1-based, unique per series.
    pub episode_number: i32,
    pub title: String,
    pub video_url: String,
    /// Free episodes bypass the unlock flow entirely.
    pub is_free: bool,
    /// Meaningless when `is_free` is true.
    pub cost_in_coins: Coins,
}
