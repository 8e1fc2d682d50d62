use crate::{FriendshipDecision, FriendshipStatus};

use std::str::FromStr;

#[test]
fn test_friendship_status_as_str() {
    assert_eq!(FriendshipStatus::Pending.as_str(), "PENDING");
    assert_eq!(FriendshipStatus::Accepted.as_str(), "ACCEPTED");
    assert_eq!(FriendshipStatus::Rejected.as_str(), "REJECTED");
}

#[test]
fn test_friendship_status_from_str() {
    assert_eq!(
        FriendshipStatus::from_str("PENDING").unwrap(),
        FriendshipStatus::Pending
    );
    assert_eq!(
        FriendshipStatus::from_str("ACCEPTED").unwrap(),
        FriendshipStatus::Accepted
    );
    assert_eq!(
        FriendshipStatus::from_str("REJECTED").unwrap(),
        FriendshipStatus::Rejected
    );
    assert!(FriendshipStatus::from_str("accepted").is_err());
    assert!(FriendshipStatus::from_str("BLOCKED").is_err());
}

#[test]
fn test_friendship_status_default() {
    assert_eq!(FriendshipStatus::default(), FriendshipStatus::Pending);
}

#[test]
fn test_only_pending_is_non_terminal() {
    assert!(!FriendshipStatus::Pending.is_terminal());
    assert!(FriendshipStatus::Accepted.is_terminal());
    assert!(FriendshipStatus::Rejected.is_terminal());
}

#[test]
fn test_transitions_only_leave_pending() {
    for decision in [FriendshipDecision::Accepted, FriendshipDecision::Rejected] {
        assert!(FriendshipStatus::Pending.can_transition_to(decision));
        assert!(!FriendshipStatus::Accepted.can_transition_to(decision));
        assert!(!FriendshipStatus::Rejected.can_transition_to(decision));
    }
}

#[test]
fn test_friendship_status_display_matches_wire_form() {
    assert_eq!(FriendshipStatus::Accepted.to_string(), "ACCEPTED");
}

#[test]
fn test_transition_guard_agrees_with_is_terminal() {
    for status in [
        FriendshipStatus::Pending,
        FriendshipStatus::Accepted,
        FriendshipStatus::Rejected,
    ] {
        for decision in [FriendshipDecision::Accepted, FriendshipDecision::Rejected] {
            assert_eq!(status.can_transition_to(decision), !status.is_terminal());
            assert!(decision.status().is_terminal());
        }
    }
}
