use crate::UserDto;

use serde::Serialize;

/// Response wrapper for the caller's accepted friends
#[derive(Debug, Serialize)]
pub struct FriendListResponse {
    pub friends: Vec<UserDto>,
}
