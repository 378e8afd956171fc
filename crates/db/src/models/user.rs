//! User entity model and DTOs.
//!
//! There are no credentials here: authentication lives with an external
//! identity provider and `id` is the opaque stable identifier it hands us.
//! This row carries the two coin balances the unlock engine debits.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reelbite_core::types::{Coins, Id, Timestamp};

/// Full user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub email: String,
    /// Purchased currency. Never negative.
    pub coins: Coins,
    /// Earned currency (ads, tasks, check-ins). Never negative.
    pub reward_coins: Coins,
    /// Loyalty counter; not spent on unlocks.
    pub points: Coins,
    pub has_membership: bool,
    pub membership_expires_at: Option<Timestamp>,
    pub check_in_streak: i32,
    pub last_check_in_date: Option<Timestamp>,
    pub autoplay_preference: bool,
    pub language_preference: String,
    pub created_at: Timestamp,
}

/// Just the two spendable balances, locked and read inside the unlock
/// transaction.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct UserBalances {
    pub coins: Coins,
    pub reward_coins: Coins,
}

/// DTO for creating a new user record after the identity provider has
/// vouched for the email.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub email: String,
}
