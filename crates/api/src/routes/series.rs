//! Route definitions for catalog browsing.

use axum::routing::get;
use axum::Router;

use crate::handlers::{episodes, series};
use crate::state::AppState;

/// Series routes mounted at `/series`.
///
/// ```text
/// GET /series/popular                                -> list_popular
/// GET /series/new                                    -> list_new
/// GET /series/ranking                                -> list_ranking
/// GET /series/coming-soon                            -> list_coming_soon
/// GET /series/kumawood                               -> list_kumawood
/// GET /series/naija                                  -> list_naija
/// GET /series/search                                 -> search
/// GET /series/{series_id}                            -> get_by_id
/// GET /series/{series_id}/episodes                   -> list_episodes
/// GET /series/{series_id}/episodes/{episode_number}  -> get_by_series_and_number
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/series/popular", get(series::list_popular))
        .route("/series/new", get(series::list_new))
        .route("/series/ranking", get(series::list_ranking))
        .route("/series/coming-soon", get(series::list_coming_soon))
        .route("/series/kumawood", get(series::list_kumawood))
        .route("/series/naija", get(series::list_naija))
        .route("/series/search", get(series::search))
        .route("/series/{series_id}", get(series::get_by_id))
        .route("/series/{series_id}/episodes", get(series::list_episodes))
        .route(
            "/series/{series_id}/episodes/{episode_number}",
            get(episodes::get_by_series_and_number),
        )
}
