//! Route definitions for the episode monetization endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::episodes;
use crate::state::AppState;

/// Episode routes mounted at `/episodes`.
///
/// ```text
/// GET  /episodes/{episode_id}/unlock-status/{user_id}  -> unlock_status
/// POST /episodes/{episode_id}/unlock                   -> unlock_episode
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/episodes/{episode_id}/unlock-status/{user_id}",
            get(episodes::unlock_status),
        )
        .route(
            "/episodes/{episode_id}/unlock",
            post(episodes::unlock_episode),
        )
}
