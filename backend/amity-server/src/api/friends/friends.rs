//! Friend list REST API handler

use crate::{ApiResult, AppState, FriendListResponse, UserDto, UserId};

use amity_db::{FriendshipStore, UserRepository};

use axum::{Json, extract::State};

/// GET /friends/
///
/// List the users the caller has an accepted friendship with
pub async fn list_friends(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> ApiResult<Json<FriendListResponse>> {
    let store = FriendshipStore::new(state.pool.clone());
    let friend_ids = store.friends(user_id).await?;

    let repo = UserRepository::new(state.pool.clone());
    let friends = repo.find_by_ids(&friend_ids).await?;

    Ok(Json(FriendListResponse {
        friends: friends.into_iter().map(UserDto::from).collect(),
    }))
}
