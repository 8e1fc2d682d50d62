use crate::FriendshipDto;

use serde::Serialize;

/// Response wrapper for a list of friendships
#[derive(Debug, Serialize)]
pub struct FriendshipListResponse {
    pub friendships: Vec<FriendshipDto>,
}
