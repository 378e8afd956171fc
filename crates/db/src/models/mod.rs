//! Entity models and DTOs.
//!
//! Row structs derive `FromRow` for sqlx and serialize in camelCase, the
//! shape the mobile/web client consumes.

pub mod episode;
pub mod ledger;
pub mod series;
pub mod unlock;
pub mod user;
pub mod watch_history;
