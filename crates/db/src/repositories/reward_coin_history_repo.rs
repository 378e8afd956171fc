//! Repository for the `reward_coin_history` ledger (append-only).

use sqlx::{PgPool, Postgres, Transaction};

use reelbite_core::types::{Coins, Id};

use crate::models::ledger::RewardCoinHistoryEntry;

const COLUMNS: &str = "id, user_id, coins_change, reason, created_at";

/// Append and read operations for reward-coin balance movements.
/// Only reward coins are mirrored here; purchased-coin spends have no
/// equivalent ledger.
pub struct RewardCoinHistoryRepo;

impl RewardCoinHistoryRepo {
    /// Append one movement row inside an enclosing transaction.
    /// `coins_change` is negative for a spend, positive for a credit.
    pub async fn append(
        tx: &mut Transaction<'_, Postgres>,
        user_id: Id,
        coins_change: Coins,
        reason: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO reward_coin_history (user_id, coins_change, reason)
             VALUES ($1, $2, $3)",
        )
        .bind(user_id)
        .bind(coins_change)
        .bind(reason)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    /// A user's reward-coin movements, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Id,
    ) -> Result<Vec<RewardCoinHistoryEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reward_coin_history
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, RewardCoinHistoryEntry>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
