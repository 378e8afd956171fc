/// All entity primary keys are PostgreSQL UUIDs.
pub type Id = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Coin amounts (purchased and reward balances, episode prices) are
/// non-negative 32-bit integers at the database boundary.
pub type Coins = i32;
