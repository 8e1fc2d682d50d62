use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An account in the user directory.
///
/// `email` and `username` are display attributes only; the friendship
/// logic works on `id` alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, username: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            username,
            created_at: Utc::now(),
        }
    }
}
