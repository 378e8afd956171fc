//! Handlers for episode unlock and unlock-status endpoints.
//!
//! The response bodies and status codes here are a frozen client
//! contract: unlock failures (including unknown episode/user) are 400
//! with `{success: false, message}`, never 404.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use reelbite_core::error::CoreError;
use reelbite_core::types::Id;
use reelbite_db::repositories::{EpisodeRepo, UnlockRepo};

use crate::error::{AppError, AppResult};
use crate::response::{UnlockResponse, UnlockStatusResponse};
use crate::state::AppState;

/// Request body of the unlock endpoint.
///
/// `user_id` is optional only so its absence maps to a clean 400 rather
/// than a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockRequest {
    pub user_id: Option<Id>,
}

/// GET /api/episodes/{episode_id}/unlock-status/{user_id}
///
/// Whether the user may watch the episode. Free episodes are always
/// unlocked; paid ones require a registry entry. Unknown episodes are a
/// 404, distinct from "locked".
pub async fn unlock_status(
    State(state): State<AppState>,
    Path((episode_id, user_id)): Path<(Id, Id)>,
) -> AppResult<impl IntoResponse> {
    let episode = EpisodeRepo::find_by_id(&state.pool, episode_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id: episode_id,
        }))?;

    let is_unlocked = UnlockRepo::is_unlocked(&state.pool, user_id, &episode).await?;

    Ok(Json(UnlockStatusResponse { is_unlocked }))
}

/// POST /api/episodes/{episode_id}/unlock
///
/// Run the unlock engine. Successful outcomes (paid, free, already
/// unlocked) are 200; business declines are 400 with the decline message.
pub async fn unlock_episode(
    State(state): State<AppState>,
    Path(episode_id): Path<Id>,
    Json(body): Json<UnlockRequest>,
) -> AppResult<impl IntoResponse> {
    let Some(user_id) = body.user_id else {
        return Err(AppError::BadRequest("userId is required".into()));
    };

    let outcome = UnlockRepo::unlock_episode(&state.pool, user_id, episode_id).await?;

    let status = if outcome.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    Ok((status, Json(UnlockResponse::from(outcome))))
}

/// GET /api/series/{series_id}/episodes/{episode_number}
///
/// Fetch one episode by its series and 1-based number.
pub async fn get_by_series_and_number(
    State(state): State<AppState>,
    Path((series_id, episode_number)): Path<(Id, i32)>,
) -> AppResult<impl IntoResponse> {
    let episode = EpisodeRepo::find_by_series_and_number(&state.pool, series_id, episode_number)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Episode in series",
            id: series_id,
        }))?;

    Ok(Json(episode))
}
