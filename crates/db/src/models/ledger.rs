//! Append-only coin ledgers: consumption history and reward-coin history.

use serde::Serialize;
use sqlx::FromRow;

use reelbite_core::types::{Coins, Id, Timestamp};

/// Which balance a consumption row was debited from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinType {
    Reward,
    Paid,
}

impl CoinType {
    /// Text stored in the `coin_type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reward => "reward",
            Self::Paid => "paid",
        }
    }
}

/// One debit of one coin type for one unlock event.
///
/// An unlock that spends both currencies produces two rows, never a
/// combined one.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionHistoryEntry {
    pub id: Id,
    pub user_id: Id,
    pub episode_id: Id,
    pub coin_type: String,
    pub coins_spent: Coins,
    pub created_at: Timestamp,
}

/// One reward-coin balance movement (positive credit or negative spend).
///
/// Purchased-coin movements have no equivalent ledger; only reward coins
/// are mirrored here.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardCoinHistoryEntry {
    pub id: Id,
    pub user_id: Id,
    pub coins_change: Coins,
    pub reason: String,
    pub created_at: Timestamp,
}
