use crate::UserDto;

use serde::Serialize;

/// Response wrapper for a single user
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserDto,
}
