use serde::Deserialize;

/// Request body for registering a user
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub username: String,
}
