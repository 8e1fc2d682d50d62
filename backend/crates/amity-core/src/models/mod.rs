pub mod friends;
pub mod friendship;
pub mod friendship_decision;
pub mod friendship_status;
pub mod new_friendship;
pub mod user;
