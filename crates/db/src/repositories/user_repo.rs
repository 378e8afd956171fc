//! Repository for the `users` table.

use sqlx::PgPool;

use reelbite_core::types::{Coins, Id};

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, coins, reward_coins, points, has_membership, \
                        membership_expires_at, check_in_streak, last_check_in_date, \
                        autoplay_preference, language_preference, created_at";

/// Provides read and credit operations for users. Debits happen only
/// inside the unlock transaction in [`crate::repositories::UnlockRepo`].
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user with zeroed balances, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: Id) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Credit reward coins (reward/check-in subsystems). The adjustment is
    /// relative so concurrent unlock debits cannot be lost, and the ledger
    /// mirror row is written in the same transaction.
    pub async fn credit_reward_coins(
        pool: &PgPool,
        id: Id,
        amount: Coins,
        reason: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE users SET reward_coins = reward_coins + $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(amount)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(user) = user else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query(
            "INSERT INTO reward_coin_history (user_id, coins_change, reason)
             VALUES ($1, $2, $3)",
        )
        .bind(id)
        .bind(amount)
        .bind(reason)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(user))
    }
}
