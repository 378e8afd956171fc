//! Repository for the `consumption_history` ledger (append-only).

use sqlx::{PgPool, Postgres, Transaction};

use reelbite_core::types::{Coins, Id};

use crate::models::ledger::{CoinType, ConsumptionHistoryEntry};

const COLUMNS: &str = "id, user_id, episode_id, coin_type, coins_spent, created_at";

/// Append and read operations for the unlock debit audit trail.
/// Rows are never updated or deleted.
pub struct ConsumptionHistoryRepo;

impl ConsumptionHistoryRepo {
    /// Append one debit row inside the unlock transaction.
    ///
    /// `coins_spent` must be positive; zero debits are not recorded
    /// (the caller guards this, and the table CHECK enforces it).
    pub async fn append(
        tx: &mut Transaction<'_, Postgres>,
        user_id: Id,
        episode_id: Id,
        coin_type: CoinType,
        coins_spent: Coins,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO consumption_history (user_id, episode_id, coin_type, coins_spent)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(user_id)
        .bind(episode_id)
        .bind(coin_type.as_str())
        .bind(coins_spent)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    /// A user's debit history, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Id,
    ) -> Result<Vec<ConsumptionHistoryEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM consumption_history
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ConsumptionHistoryEntry>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
