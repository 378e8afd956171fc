//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` (or, for ledger appends inside the unlock
//! transaction, a `&mut Transaction`) as the first argument.

pub mod consumption_history_repo;
pub mod episode_repo;
pub mod reward_coin_history_repo;
pub mod series_repo;
pub mod unlock_repo;
pub mod user_repo;
pub mod watch_history_repo;

pub use consumption_history_repo::ConsumptionHistoryRepo;
pub use episode_repo::EpisodeRepo;
pub use reward_coin_history_repo::RewardCoinHistoryRepo;
pub use series_repo::SeriesRepo;
pub use unlock_repo::UnlockRepo;
pub use user_repo::UserRepo;
pub use watch_history_repo::WatchHistoryRepo;
