use crate::{CoreError, CoreResult, FriendshipStatus};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// The answer a participant gives to a pending friendship request.
///
/// Only terminal statuses are decisions; a request can never be "decided"
/// back to pending.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FriendshipDecision {
    Accepted,
    Rejected,
}

impl FriendshipDecision {
    pub fn status(&self) -> FriendshipStatus {
        match self {
            Self::Accepted => FriendshipStatus::Accepted,
            Self::Rejected => FriendshipStatus::Rejected,
        }
    }
}

impl From<FriendshipDecision> for FriendshipStatus {
    fn from(decision: FriendshipDecision) -> Self {
        decision.status()
    }
}

impl TryFrom<FriendshipStatus> for FriendshipDecision {
    type Error = CoreError;

    #[track_caller]
    fn try_from(status: FriendshipStatus) -> CoreResult<Self> {
        match status {
            FriendshipStatus::Accepted => Ok(Self::Accepted),
            FriendshipStatus::Rejected => Ok(Self::Rejected),
            FriendshipStatus::Pending => Err(CoreError::Validation {
                message: "PENDING is not a valid decision; use ACCEPTED or REJECTED".to_string(),
                field: Some("status".into()),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl FromStr for FriendshipDecision {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        FriendshipStatus::from_str(s)?.try_into()
    }
}
