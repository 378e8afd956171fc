//! Handlers for user balance display and spending history screens.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use reelbite_core::error::CoreError;
use reelbite_core::types::Id;
use reelbite_db::repositories::{ConsumptionHistoryRepo, RewardCoinHistoryRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/users/{id}
///
/// Full user record, including `coins`, `rewardCoins` and `points` for
/// the wallet screen.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<Id>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    Ok(Json(user))
}

/// GET /api/users/{id}/consumption-history
///
/// Unlock debits, newest first (consumption records screen).
pub async fn consumption_history(
    State(state): State<AppState>,
    Path(user_id): Path<Id>,
) -> AppResult<impl IntoResponse> {
    let entries = ConsumptionHistoryRepo::list_for_user(&state.pool, user_id).await?;
    Ok(Json(entries))
}

/// GET /api/users/{id}/reward-coin-history
///
/// Reward-coin movements, newest first (reward coins history screen).
pub async fn reward_coin_history(
    State(state): State<AppState>,
    Path(user_id): Path<Id>,
) -> AppResult<impl IntoResponse> {
    let entries = RewardCoinHistoryRepo::list_for_user(&state.pool, user_id).await?;
    Ok(Json(entries))
}
