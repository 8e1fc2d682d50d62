use crate::{ApiError, AppState, UserId};

use amity_core::User;
use amity_db::{Database, UserRepository};

use axum::{body::Body, extract::FromRequestParts, http::Request};

async fn create_test_state() -> AppState {
    let pool = Database::connect_in_memory()
        .await
        .expect("Failed to create test pool");
    AppState::new(pool)
}

async fn register(state: &AppState, username: &str) -> User {
    let user = User::new(format!("{}@test.local", username), username.to_string());
    UserRepository::new(state.pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");
    user
}

async fn extract(state: &AppState, header: Option<&str>) -> Result<UserId, ApiError> {
    let mut builder = Request::builder();
    if let Some(value) = header {
        builder = builder.header("X-User-Id", value);
    }
    let request = builder.body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    UserId::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn given_registered_user_header_when_extracting_then_returns_user_id() {
    // Given
    let state = create_test_state().await;
    let alice = register(&state, "alice").await;

    // When
    let result = extract(&state, Some(&alice.id.to_string())).await;

    // Then
    assert_eq!(result.unwrap().0, alice.id);
}

#[tokio::test]
async fn given_no_header_when_extracting_then_unauthorized() {
    // Given
    let state = create_test_state().await;

    // When
    let result = extract(&state, None).await;

    // Then
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn given_malformed_header_when_extracting_then_unauthorized() {
    // Given
    let state = create_test_state().await;

    // When
    let result = extract(&state, Some("not-a-valid-uuid")).await;

    // Then
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn given_unknown_user_header_when_extracting_then_unauthorized() {
    // Given
    let state = create_test_state().await;

    // When
    let result = extract(&state, Some("12345678-1234-1234-1234-123456789abc")).await;

    // Then
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
