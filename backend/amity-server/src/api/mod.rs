pub mod error;
pub mod extractors;
pub mod friends;
pub mod friendships;
pub mod users;
