//! Episode monetization policy: dual-currency split and unlock outcomes.
//!
//! Users carry two coin balances: `coins` (purchased) and `reward_coins`
//! (earned through ads, tasks and check-ins). Unlocking a paid episode
//! always spends reward coins first; only the remainder comes out of the
//! purchased balance. The arithmetic here is pure -- the transactional
//! sequencing lives in `reelbite_db::repositories::UnlockRepo`.

use crate::types::{Coins, Id};

/// How the cost of one unlock is divided between the two balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinSplit {
    pub reward_coins_used: Coins,
    pub paid_coins_used: Coins,
}

impl CoinSplit {
    /// Compute the reward-coins-first split for an episode costing `cost`,
    /// given the user's current reward balance.
    ///
    /// If the reward balance covers the full cost, no purchased coins are
    /// touched. Otherwise the entire reward balance is spent and the
    /// remainder falls to purchased coins. A zero-cost episode yields a
    /// zero split on both sides.
    pub fn compute(cost: Coins, reward_balance: Coins) -> Self {
        if reward_balance >= cost {
            Self {
                reward_coins_used: cost,
                paid_coins_used: 0,
            }
        } else {
            Self {
                reward_coins_used: reward_balance,
                paid_coins_used: cost - reward_balance,
            }
        }
    }

    /// Whether the purchased-coin balance can cover the paid portion.
    pub fn covered_by(&self, paid_balance: Coins) -> bool {
        paid_balance >= self.paid_coins_used
    }
}

/// Terminal outcome of one unlock attempt.
///
/// `Free` and `AlreadyUnlocked` are successes that short-circuit every
/// write; callers must not treat them as failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// Paid for and granted in this call.
    Unlocked,
    /// The episode is free; nothing was charged or recorded.
    Free,
    /// A registry entry already existed; nothing was charged.
    AlreadyUnlocked,
    /// No such episode.
    EpisodeNotFound,
    /// No such user.
    UserNotFound,
    /// Purchased balance cannot cover the paid portion of the split.
    NotEnoughCoins,
}

impl UnlockOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Unlocked | Self::Free | Self::AlreadyUnlocked)
    }

    /// Human-readable message, part of the public API contract.
    pub fn message(self) -> &'static str {
        match self {
            Self::Unlocked => "Episode unlocked successfully",
            Self::Free => "Episode is free",
            Self::AlreadyUnlocked => "Episode already unlocked",
            Self::EpisodeNotFound => "Episode not found",
            Self::UserNotFound => "User not found",
            Self::NotEnoughCoins => "Not enough coins",
        }
    }
}

/// Ledger reason recorded alongside a reward-coin debit.
pub fn unlock_reason(episode_id: Id) -> String {
    format!("Unlocked episode {episode_id}")
}
