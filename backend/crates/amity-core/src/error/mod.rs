use crate::FriendshipStatus;

use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid friendship status: {value} {location}")]
    InvalidFriendshipStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("User {user_id} cannot befriend themselves {location}")]
    SelfFriendship {
        user_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Friendship cannot move from {from} to {to} {location}")]
    InvalidTransition {
        from: FriendshipStatus,
        to: FriendshipStatus,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
