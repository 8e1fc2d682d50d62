use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// A validated friendship request that has not been stored yet.
///
/// `user1` is always the requester and `user2` the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewFriendship {
    user1: Uuid,
    user2: Uuid,
}

impl NewFriendship {
    #[track_caller]
    pub fn new(requester: Uuid, target: Uuid) -> CoreResult<Self> {
        if requester == target {
            return Err(CoreError::SelfFriendship {
                user_id: requester,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            user1: requester,
            user2: target,
        })
    }

    pub fn user1(&self) -> Uuid {
        self.user1
    }

    pub fn user2(&self) -> Uuid {
        self.user2
    }
}
