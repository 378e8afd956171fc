pub mod episodes;
pub mod health;
pub mod series;
pub mod users;
pub mod watch_history;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /series/popular                                   popular listing
/// /series/new                                       new listing
/// /series/ranking                                   ranked listing
/// /series/coming-soon                               coming-soon carousel
/// /series/kumawood                                  Kumawood category row
/// /series/naija                                     Naija category row
/// /series/search?q=                                 title search
/// /series/{series_id}                               series detail
/// /series/{series_id}/episodes                      episode listing
/// /series/{series_id}/episodes/{episode_number}     episode by number
///
/// /episodes/{episode_id}/unlock-status/{user_id}    unlock check
/// /episodes/{episode_id}/unlock                     unlock (POST)
///
/// /users/{user_id}                                  balances for wallet screen
/// /users/{user_id}/consumption-history              unlock debits
/// /users/{user_id}/reward-coin-history              reward-coin movements
///
/// /watch-history                                    progress upsert (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(series::router())
        .merge(episodes::router())
        .merge(users::router())
        .merge(watch_history::router())
}
