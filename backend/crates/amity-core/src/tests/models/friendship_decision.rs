use crate::{CoreError, FriendshipDecision, FriendshipStatus};

use std::str::FromStr;

#[test]
fn test_decision_maps_to_terminal_status() {
    assert_eq!(
        FriendshipDecision::Accepted.status(),
        FriendshipStatus::Accepted
    );
    assert_eq!(
        FriendshipStatus::from(FriendshipDecision::Rejected),
        FriendshipStatus::Rejected
    );
}

#[test]
fn test_decision_from_str() {
    assert_eq!(
        FriendshipDecision::from_str("ACCEPTED").unwrap(),
        FriendshipDecision::Accepted
    );
    assert_eq!(
        FriendshipDecision::from_str("REJECTED").unwrap(),
        FriendshipDecision::Rejected
    );
}

#[test]
fn test_pending_is_not_a_decision() {
    let result = FriendshipDecision::from_str("PENDING");
    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "status"
    ));
}

#[test]
fn test_unknown_decision_is_rejected() {
    let result = FriendshipDecision::from_str("MAYBE");
    assert!(matches!(
        result,
        Err(CoreError::InvalidFriendshipStatus { ref value, .. }) if value == "MAYBE"
    ));
}
