use amity_core::Friendship;

use serde::Serialize;

/// Friendship DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct FriendshipDto {
    pub id: i64,
    pub user1: String,
    pub user2: String,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Friendship> for FriendshipDto {
    fn from(f: Friendship) -> Self {
        Self {
            id: f.id,
            user1: f.user1.to_string(),
            user2: f.user2.to_string(),
            status: f.status.as_str().to_string(),
            created_at: f.created_at.timestamp(),
            updated_at: f.updated_at.timestamp(),
        }
    }
}
