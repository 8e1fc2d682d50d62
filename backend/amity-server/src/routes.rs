use crate::{
    AppState, create_friendship, create_user, get_user, health, list_friends, list_friendships,
    respond_to_friendship,
};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Friendships
        .route("/friends/", get(list_friends))
        .route(
            "/friendships/",
            get(list_friendships).post(create_friendship),
        )
        .route("/friendship-requests/", post(create_friendship))
        .route("/friendship-requests/{id}/", put(respond_to_friendship))
        // User directory
        .route("/users/", post(create_user))
        .route("/users/{id}/", get(get_user))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
