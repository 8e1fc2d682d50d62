use crate::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures reported by [`FriendshipStore`](crate::FriendshipStore).
///
/// Everything except `Storage` is a local validation failure and will not
/// go away on retry.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Self-friendship, or a user acting on a row they are not part of.
    #[error("Invalid operation: {message} {location}")]
    InvalidOperation {
        message: String,
        location: ErrorLocation,
    },

    /// A friendship already exists for the pair.
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// The row is no longer pending.
    #[error("Invalid state: {message} {location}")]
    InvalidState {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Storage error: {source} {location}")]
    Storage {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl From<DbError> for StoreError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Storage {
            source: DbError::from(source),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
