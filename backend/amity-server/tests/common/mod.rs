#![allow(dead_code)]

//! Test infrastructure for amity-server API tests

use amity_db::Database;
use amity_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;
use uuid::Uuid;

/// Create AppState over a fresh in-memory database
pub async fn create_test_app_state() -> AppState {
    let pool = Database::connect_in_memory()
        .await
        .expect("Failed to create test database");
    AppState::new(pool)
}

/// Create a test user, returning its id
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> Uuid {
    let user_id = Uuid::new_v4();

    sqlx::query("INSERT INTO users (id, email, username, created_at) VALUES (?, ?, ?, ?)")
        .bind(user_id.to_string())
        .bind(format!("{}@test.local", username))
        .bind(username)
        .bind(chrono::Utc::now().timestamp())
        .execute(pool)
        .await
        .expect("Failed to create test user");

    user_id
}

/// Create a friendship row directly, bypassing the store
pub async fn create_test_friendship(
    pool: &SqlitePool,
    user1: Uuid,
    user2: Uuid,
    status: &str,
) -> i64 {
    let now = chrono::Utc::now().timestamp();

    let (id,): (i64,) = sqlx::query_as(
        r#"
            INSERT INTO friendships (user1_id, user2_id, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
        "#,
    )
    .bind(user1.to_string())
    .bind(user2.to_string())
    .bind(status)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
    .expect("Failed to create test friendship");

    id
}

/// Build a request with an optional `X-User-Id` and JSON body
pub fn json_request(
    method: &str,
    uri: &str,
    user_id: Option<Uuid>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header("X-User-Id", user_id.to_string());
    }

    match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send one request through a fresh router
pub async fn send(state: &AppState, request: Request<Body>) -> Response<Body> {
    let app: Router = build_router(state.clone());
    app.oneshot(request).await.unwrap()
}

/// Send one request and decode the JSON response
pub async fn send_json(state: &AppState, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = send(state, request).await;
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
