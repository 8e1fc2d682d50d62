use serde::Deserialize;

/// Request body for sending a friendship request
#[derive(Debug, Deserialize)]
pub struct CreateFriendshipRequest {
    /// The user being asked
    pub user2: String,

    /// Optional; when given it must be the caller
    #[serde(default)]
    pub user1: Option<String>,
}
