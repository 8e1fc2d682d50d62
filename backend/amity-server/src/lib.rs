pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::user_id::UserId,
    friends::{friend_list_response::FriendListResponse, friends::list_friends},
    friendships::{
        create_friendship_request::CreateFriendshipRequest,
        friendship_dto::FriendshipDto,
        friendship_list_response::FriendshipListResponse,
        friendship_response::FriendshipResponse,
        friendships::{create_friendship, list_friendships, respond_to_friendship},
        respond_friendship_request::RespondFriendshipRequest,
    },
    users::{
        create_user_request::CreateUserRequest,
        user_dto::UserDto,
        user_response::UserResponse,
        users::{create_user, get_user},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
