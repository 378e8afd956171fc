//! Route definitions for user balances and history screens.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// User routes mounted at `/users`.
///
/// ```text
/// GET /users/{user_id}                        -> get_by_id
/// GET /users/{user_id}/consumption-history    -> consumption_history
/// GET /users/{user_id}/reward-coin-history    -> reward_coin_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/{user_id}", get(users::get_by_id))
        .route(
            "/users/{user_id}/consumption-history",
            get(users::consumption_history),
        )
        .route(
            "/users/{user_id}/reward-coin-history",
            get(users::reward_coin_history),
        )
}
