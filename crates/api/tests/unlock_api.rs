//! HTTP contract tests for the monetization endpoints.
//!
//! Drives the full router (middleware included) via `tower::ServiceExt`
//! against a real database. The response shapes asserted here are the
//! frozen client contract.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use reelbite_core::types::{Coins, Id};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool, coins: Coins, reward_coins: Coins) -> Id {
    let (id,): (Id,) = sqlx::query_as(
        "INSERT INTO users (email, coins, reward_coins)
         VALUES ($1, $2, $3)
         RETURNING id",
    )
    .bind(format!("{}@test.example", Uuid::new_v4()))
    .bind(coins)
    .bind(reward_coins)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

async fn seed_episode(pool: &PgPool, is_free: bool, cost_in_coins: Coins) -> Id {
    let (series_id,): (Id,) = sqlx::query_as(
        "INSERT INTO series (title, synopsis, poster_url)
         VALUES ('Palace Intrigue', 'synopsis', 'https://img.example/poster.jpg')
         RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap();

    let (id,): (Id,) = sqlx::query_as(
        "INSERT INTO episodes (series_id, episode_number, title, video_url, is_free, cost_in_coins)
         VALUES ($1, 11, 'Episode 11', 'https://video.example/11.mp4', $2, $3)
         RETURNING id",
    )
    .bind(series_id)
    .bind(is_free)
    .bind(cost_in_coins)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Test: full unlock flow over HTTP
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn unlock_flow_debits_and_reports_status(pool: PgPool) {
    let user_id = seed_user(&pool, 100, 50).await;
    let episode_id = seed_episode(&pool, false, 80).await;
    let app = common::build_test_app(pool);

    // Initially locked.
    let response = app
        .clone()
        .oneshot(get(&format!(
            "/api/episodes/{episode_id}/unlock-status/{user_id}"
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["isUnlocked"], false);

    // Unlock.
    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/episodes/{episode_id}/unlock"),
            serde_json::json!({ "userId": user_id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Episode unlocked successfully");

    // Now unlocked.
    let response = app
        .clone()
        .oneshot(get(&format!(
            "/api/episodes/{episode_id}/unlock-status/{user_id}"
        )))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["isUnlocked"], true);

    // Balances reflect the reward-first split: 50 reward + 30 paid.
    let response = app
        .clone()
        .oneshot(get(&format!("/api/users/{user_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["coins"], 70);
    assert_eq!(json["rewardCoins"], 0);

    // Both ledger rows are visible on the history endpoints.
    let response = app
        .clone()
        .oneshot(get(&format!("/api/users/{user_id}/consumption-history")))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    let response = app
        .oneshot(get(&format!("/api/users/{user_id}/reward-coin-history")))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["coinsChange"], -50);
}

// ---------------------------------------------------------------------------
// Test: repeat unlock over HTTP is a 200 no-op
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn repeat_unlock_returns_already_unlocked(pool: PgPool) {
    let user_id = seed_user(&pool, 100, 0).await;
    let episode_id = seed_episode(&pool, false, 50).await;
    let app = common::build_test_app(pool);

    let uri = format!("/api/episodes/{episode_id}/unlock");
    let body = serde_json::json!({ "userId": user_id });

    let first = app
        .clone()
        .oneshot(post_json(&uri, body.clone()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.oneshot(post_json(&uri, body)).await.unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    let json = body_json(second).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Episode already unlocked");
}

// ---------------------------------------------------------------------------
// Test: free episodes are a 200 success without any debit
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn free_episode_unlock_is_free(pool: PgPool) {
    let user_id = seed_user(&pool, 0, 0).await;
    let episode_id = seed_episode(&pool, true, 0).await;
    let app = common::build_test_app(pool);

    let response = app
        .oneshot(post_json(
            &format!("/api/episodes/{episode_id}/unlock"),
            serde_json::json!({ "userId": user_id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Episode is free");
}

// ---------------------------------------------------------------------------
// Test: business declines are 400 with {success: false}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn insufficient_funds_is_a_400_decline(pool: PgPool) {
    let user_id = seed_user(&pool, 5, 10).await;
    let episode_id = seed_episode(&pool, false, 80).await;
    let app = common::build_test_app(pool);

    let response = app
        .oneshot(post_json(
            &format!("/api/episodes/{episode_id}/unlock"),
            serde_json::json!({ "userId": user_id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Not enough coins");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_episode_unlock_is_a_400_decline(pool: PgPool) {
    let user_id = seed_user(&pool, 100, 0).await;
    let app = common::build_test_app(pool);

    // Folded into the business-failure path, not a 404.
    let response = app
        .oneshot(post_json(
            &format!("/api/episodes/{}/unlock", Uuid::new_v4()),
            serde_json::json!({ "userId": user_id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Episode not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_user_id_is_a_400(pool: PgPool) {
    let episode_id = seed_episode(&pool, false, 50).await;
    let app = common::build_test_app(pool);

    let response = app
        .oneshot(post_json(
            &format!("/api/episodes/{episode_id}/unlock"),
            serde_json::json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: unlock-status distinguishes unknown episode from locked
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn unlock_status_for_unknown_episode_is_404(pool: PgPool) {
    let user_id = seed_user(&pool, 0, 0).await;
    let app = common::build_test_app(pool);

    let response = app
        .oneshot(get(&format!(
            "/api/episodes/{}/unlock-status/{user_id}",
            Uuid::new_v4()
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn free_episode_status_needs_no_registry_entry(pool: PgPool) {
    let user_id = seed_user(&pool, 0, 0).await;
    let episode_id = seed_episode(&pool, true, 0).await;
    let app = common::build_test_app(pool);

    let response = app
        .oneshot(get(&format!(
            "/api/episodes/{episode_id}/unlock-status/{user_id}"
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["isUnlocked"], true);
}

// ---------------------------------------------------------------------------
// Test: unknown user on the read path is a 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_user_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = app
        .oneshot(get(&format!("/api/users/{}", Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}
