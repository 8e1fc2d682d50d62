use crate::FriendshipDto;

use serde::Serialize;

/// Response wrapper for a single friendship
#[derive(Debug, Serialize)]
pub struct FriendshipResponse {
    pub friendship: FriendshipDto,
}
