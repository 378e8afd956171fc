//! Handlers for catalog browsing (series listings and detail).
//!
//! Pure read-throughs to [`SeriesRepo`] / [`EpisodeRepo`]; the engine
//! never writes here.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use reelbite_core::error::CoreError;
use reelbite_core::types::Id;
use reelbite_db::repositories::{EpisodeRepo, SeriesRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}

/// GET /api/series/popular
pub async fn list_popular(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let series = SeriesRepo::list_popular(&state.pool).await?;
    Ok(Json(series))
}

/// GET /api/series/new
pub async fn list_new(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let series = SeriesRepo::list_new(&state.pool).await?;
    Ok(Json(series))
}

/// GET /api/series/ranking
pub async fn list_ranking(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let series = SeriesRepo::list_ranking(&state.pool).await?;
    Ok(Json(series))
}

/// GET /api/series/coming-soon
pub async fn list_coming_soon(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let series = SeriesRepo::list_coming_soon(&state.pool).await?;
    Ok(Json(series))
}

/// GET /api/series/kumawood
pub async fn list_kumawood(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let series = SeriesRepo::list_kumawood(&state.pool).await?;
    Ok(Json(series))
}

/// GET /api/series/naija
pub async fn list_naija(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let series = SeriesRepo::list_naija(&state.pool).await?;
    Ok(Json(series))
}

/// GET /api/series/search?q=term
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let series = SeriesRepo::search_by_title(&state.pool, &params.q).await?;
    Ok(Json(series))
}

/// GET /api/series/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(series_id): Path<Id>,
) -> AppResult<impl IntoResponse> {
    let series = SeriesRepo::find_by_id(&state.pool, series_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Series",
            id: series_id,
        }))?;

    Ok(Json(series))
}

/// GET /api/series/{id}/episodes
pub async fn list_episodes(
    State(state): State<AppState>,
    Path(series_id): Path<Id>,
) -> AppResult<impl IntoResponse> {
    let episodes = EpisodeRepo::list_by_series(&state.pool, series_id).await?;
    Ok(Json(episodes))
}
