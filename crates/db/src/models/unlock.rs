//! Unlock registry model.

use serde::Serialize;
use sqlx::FromRow;

use reelbite_core::types::{Id, Timestamp};

/// Permanent grant of paid access to one episode for one user.
///
/// Existence of this row is equivalent to "the user has paid for this
/// episode", regardless of later pricing changes. Rows are never updated
/// or deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockedEpisode {
    pub id: Id,
    pub user_id: Id,
    pub episode_id: Id,
    pub created_at: Timestamp,
}
