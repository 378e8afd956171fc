pub mod episodes;
pub mod series;
pub mod users;
pub mod watch_history;
