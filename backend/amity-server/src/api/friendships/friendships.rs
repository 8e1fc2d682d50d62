//! Friendship REST API handlers
//!
//! Thin wrappers over [`FriendshipStore`]: they authenticate the caller,
//! validate the body, and pass the caller explicitly to every store call.

use crate::{
    ApiError, ApiResult, AppState, CreateFriendshipRequest, FriendshipDto,
    FriendshipListResponse, FriendshipResponse, RespondFriendshipRequest, UserId,
};

use amity_core::FriendshipDecision;
use amity_db::{FriendshipStore, UserRepository};

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use error_location::ErrorLocation;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /friendships/
///
/// List every friendship the caller takes part in, in any status
pub async fn list_friendships(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> ApiResult<Json<FriendshipListResponse>> {
    let store = FriendshipStore::new(state.pool.clone());
    let friendships = store.friendships(user_id).await?;

    Ok(Json(FriendshipListResponse {
        friendships: friendships.into_iter().map(FriendshipDto::from).collect(),
    }))
}

/// POST /friendships/ and POST /friendship-requests/
///
/// Send a friendship request from the caller to `user2`
pub async fn create_friendship(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    payload: Result<Json<CreateFriendshipRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<FriendshipResponse>)> {
    let Json(req) = payload?;

    // 1. The requester is always the caller
    if let Some(user1) = req.user1.as_deref() {
        let user1 = parse_user_field(user1, "user1")?;
        if user1 != user_id {
            log::warn!(
                "User {} tried to send a friendship request on behalf of {}",
                user_id,
                user1
            );
            return Err(ApiError::InvalidOperation {
                message: "You can only send friendship requests as yourself".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    }

    // 2. The target must be a registered user
    let target = parse_user_field(&req.user2, "user2")?;
    let repo = UserRepository::new(state.pool.clone());
    if repo.find_by_id(target).await?.is_none() {
        return Err(ApiError::NotFound {
            message: format!("User {} not found", target),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // 3. Create the pending request
    let store = FriendshipStore::new(state.pool.clone());
    let friendship = store.request(user_id, target).await?;

    Ok((
        StatusCode::CREATED,
        Json(FriendshipResponse {
            friendship: friendship.into(),
        }),
    ))
}

/// PUT /friendship-requests/{id}/
///
/// Accept or reject a pending friendship request
pub async fn respond_to_friendship(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<String>,
    payload: Result<Json<RespondFriendshipRequest>, JsonRejection>,
) -> ApiResult<Json<FriendshipResponse>> {
    let friendship_id = id.parse::<i64>().map_err(|_| ApiError::Validation {
        message: format!("Invalid friendship id: '{}'", id),
        field: Some("id".into()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let Json(req) = payload?;
    let decision = FriendshipDecision::from_str(req.status.trim())?;

    let store = FriendshipStore::new(state.pool.clone());
    let friendship = store.respond(friendship_id, user_id, decision).await?;

    Ok(Json(FriendshipResponse {
        friendship: friendship.into(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn parse_user_field(value: &str, field: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(value.trim()).map_err(|_| ApiError::Validation {
        message: format!("Invalid {}: '{}'", field, value),
        field: Some(field.into()),
        location: ErrorLocation::from(Location::caller()),
    })
}
