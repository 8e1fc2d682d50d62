pub mod connection;
pub mod error;
pub mod repositories;
pub mod store;

#[cfg(test)]
mod tests;

pub use connection::database::Database;
pub use error::{DbError, Result};
pub use repositories::friendship_repository::FriendshipRepository;
pub use repositories::user_repository::UserRepository;
pub use store::friendship_store::FriendshipStore;
pub use store::store_error::{Result as StoreResult, StoreError};
