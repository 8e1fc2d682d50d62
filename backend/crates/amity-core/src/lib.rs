pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::friends::friends_of;
pub use models::friendship::Friendship;
pub use models::friendship_decision::FriendshipDecision;
pub use models::friendship_status::FriendshipStatus;
pub use models::new_friendship::NewFriendship;
pub use models::user::User;
