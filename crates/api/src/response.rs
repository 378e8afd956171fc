//! Typed response payloads for the monetization endpoints.
//!
//! These shapes are the public client contract; the mobile/web player
//! matches on them literally, so prefer these structs over ad-hoc
//! `serde_json::json!` bodies.

use serde::Serialize;

use reelbite_core::unlock::UnlockOutcome;

/// Body of `POST /api/episodes/{id}/unlock`.
#[derive(Debug, Serialize)]
pub struct UnlockResponse {
    pub success: bool,
    pub message: &'static str,
}

impl From<UnlockOutcome> for UnlockResponse {
    fn from(outcome: UnlockOutcome) -> Self {
        Self {
            success: outcome.is_success(),
            message: outcome.message(),
        }
    }
}

/// Body of `GET /api/episodes/{id}/unlock-status/{user_id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockStatusResponse {
    pub is_unlocked: bool,
}
