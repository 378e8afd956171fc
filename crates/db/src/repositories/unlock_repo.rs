//! Unlock registry and the episode unlock engine.
//!
//! The registry itself is a plain (user, episode) set, but the unlock
//! operation is the one place in the system with real sequencing rules:
//! balance debit, ledger appends and the registry insert must land
//! atomically, and two concurrent attempts for the same pair must charge
//! at most once. Both guarantees come from a single transaction: the
//! `FOR UPDATE` lock on the user row serializes concurrent unlocks (the
//! loser of a same-pair race blocks until the winner commits, then finds
//! the registry entry and bails out as a no-op success), and the unique
//! index `uq_unlocked_episodes_user_episode` backstops the grant itself.

use sqlx::PgPool;

use reelbite_core::types::Id;
use reelbite_core::unlock::{unlock_reason, CoinSplit, UnlockOutcome};

use crate::models::episode::Episode;
use crate::models::ledger::CoinType;
use crate::models::user::UserBalances;
use crate::repositories::{ConsumptionHistoryRepo, EpisodeRepo, RewardCoinHistoryRepo};

/// Registry of permanent unlock grants, plus the unlock engine.
pub struct UnlockRepo;

impl UnlockRepo {
    /// Whether a registry entry exists for the pair. Side-effect free.
    pub async fn exists(pool: &PgPool, user_id: Id, episode_id: Id) -> Result<bool, sqlx::Error> {
        let row: Option<(Id,)> = sqlx::query_as(
            "SELECT id FROM unlocked_episodes WHERE user_id = $1 AND episode_id = $2",
        )
        .bind(user_id)
        .bind(episode_id)
        .fetch_optional(pool)
        .await?;
        Ok(row.is_some())
    }

    /// Whether the user may watch the episode: free episodes always,
    /// otherwise iff a registry entry exists. Side-effect free and safe
    /// to call concurrently. Episode resolution (and its 404) is the
    /// caller's job via [`EpisodeRepo::find_by_id`].
    pub async fn is_unlocked(
        pool: &PgPool,
        user_id: Id,
        episode: &Episode,
    ) -> Result<bool, sqlx::Error> {
        if episode.is_free {
            return Ok(true);
        }
        Self::exists(pool, user_id, episode.id).await
    }

    /// Unlock an episode for a user, debiting reward coins first and
    /// purchased coins for the remainder.
    ///
    /// All writes -- registry insert, balance debit, ledger appends --
    /// happen in one transaction; every non-`Unlocked` outcome leaves the
    /// database untouched. Infrastructure failures propagate as
    /// `sqlx::Error` and roll the whole attempt back.
    pub async fn unlock_episode(
        pool: &PgPool,
        user_id: Id,
        episode_id: Id,
    ) -> Result<UnlockOutcome, sqlx::Error> {
        let Some(episode) = EpisodeRepo::find_by_id(pool, episode_id).await? else {
            return Ok(UnlockOutcome::EpisodeNotFound);
        };

        if episode.is_free {
            return Ok(UnlockOutcome::Free);
        }

        // Fast path; the insert below remains the authoritative guard.
        if Self::exists(pool, user_id, episode_id).await? {
            return Ok(UnlockOutcome::AlreadyUnlocked);
        }

        let mut tx = pool.begin().await?;

        // Row lock serializes this unlock against concurrent unlocks and
        // reward credits for the same user; the loser of a race blocks
        // here until the winner commits.
        let balances: Option<UserBalances> = sqlx::query_as(
            "SELECT coins, reward_coins FROM users WHERE id = $1 FOR UPDATE",
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(balances) = balances else {
            tx.rollback().await?;
            return Ok(UnlockOutcome::UserNotFound);
        };

        let inserted = sqlx::query(
            "INSERT INTO unlocked_episodes (user_id, episode_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, episode_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(episode_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if inserted == 0 {
            // A concurrent unlock won the race and committed first.
            tx.rollback().await?;
            return Ok(UnlockOutcome::AlreadyUnlocked);
        }

        let split = CoinSplit::compute(episode.cost_in_coins, balances.reward_coins);
        if !split.covered_by(balances.coins) {
            tx.rollback().await?;
            return Ok(UnlockOutcome::NotEnoughCoins);
        }

        // Both balances in one statement; a reader never sees a
        // half-applied debit.
        sqlx::query(
            "UPDATE users
             SET coins = coins - $2, reward_coins = reward_coins - $3
             WHERE id = $1",
        )
        .bind(user_id)
        .bind(split.paid_coins_used)
        .bind(split.reward_coins_used)
        .execute(&mut *tx)
        .await?;

        if split.reward_coins_used > 0 {
            ConsumptionHistoryRepo::append(
                &mut tx,
                user_id,
                episode_id,
                CoinType::Reward,
                split.reward_coins_used,
            )
            .await?;
            RewardCoinHistoryRepo::append(
                &mut tx,
                user_id,
                -split.reward_coins_used,
                &unlock_reason(episode_id),
            )
            .await?;
        }

        if split.paid_coins_used > 0 {
            ConsumptionHistoryRepo::append(
                &mut tx,
                user_id,
                episode_id,
                CoinType::Paid,
                split.paid_coins_used,
            )
            .await?;
        }

        tx.commit().await?;

        tracing::info!(
            %user_id,
            %episode_id,
            reward_coins_used = split.reward_coins_used,
            paid_coins_used = split.paid_coins_used,
            "Episode unlocked"
        );

        Ok(UnlockOutcome::Unlocked)
    }
}
