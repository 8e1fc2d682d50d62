use crate::{CoreError, CoreResult, FriendshipDecision, FriendshipStatus};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A relationship between two distinct users.
///
/// The column order records who sent the request (`user1`). For listing
/// friends the pair is treated as unordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Friendship {
    pub id: i64,
    pub user1: Uuid,
    pub user2: Uuid,
    pub status: FriendshipStatus,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Friendship {
    pub fn involves(&self, user: Uuid) -> bool {
        self.user1 == user || self.user2 == user
    }

    /// The participant that is not `user`, or `None` when `user` is not on
    /// this row at all.
    pub fn other_party(&self, user: Uuid) -> Option<Uuid> {
        if self.user1 == user {
            Some(self.user2)
        } else if self.user2 == user {
            Some(self.user1)
        } else {
            None
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status == FriendshipStatus::Accepted
    }

    /// Apply a participant's decision. Only pending rows can be decided.
    #[track_caller]
    pub fn decide(&mut self, decision: FriendshipDecision) -> CoreResult<()> {
        if !self.status.can_transition_to(decision) {
            return Err(CoreError::InvalidTransition {
                from: self.status,
                to: decision.status(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.status = decision.status();
        self.updated_at = Utc::now();
        Ok(())
    }
}
