//! Route definition for playback progress reporting.

use axum::routing::post;
use axum::Router;

use crate::handlers::watch_history;
use crate::state::AppState;

/// ```text
/// POST /watch-history  -> upsert
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/watch-history", post(watch_history::upsert))
}
