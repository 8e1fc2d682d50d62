use crate::{CoreError, Friendship, FriendshipDecision, FriendshipStatus};

use chrono::Utc;
use uuid::Uuid;

fn pending(user1: Uuid, user2: Uuid) -> Friendship {
    let now = Utc::now();
    Friendship {
        id: 1,
        user1,
        user2,
        status: FriendshipStatus::Pending,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_other_party_is_symmetric() {
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let friendship = pending(alice, bob);

    assert_eq!(friendship.other_party(alice), Some(bob));
    assert_eq!(friendship.other_party(bob), Some(alice));
    assert_eq!(friendship.other_party(Uuid::new_v4()), None);
}

#[test]
fn test_involves_either_participant() {
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let friendship = pending(alice, bob);

    assert!(friendship.involves(alice));
    assert!(friendship.involves(bob));
    assert!(!friendship.involves(Uuid::new_v4()));
}

#[test]
fn test_decide_accepts_pending() {
    let mut friendship = pending(Uuid::new_v4(), Uuid::new_v4());
    let before = friendship.updated_at;

    friendship.decide(FriendshipDecision::Accepted).unwrap();

    assert_eq!(friendship.status, FriendshipStatus::Accepted);
    assert!(friendship.is_accepted());
    assert!(friendship.updated_at >= before);
}

#[test]
fn test_decide_rejects_pending() {
    let mut friendship = pending(Uuid::new_v4(), Uuid::new_v4());

    friendship.decide(FriendshipDecision::Rejected).unwrap();

    assert_eq!(friendship.status, FriendshipStatus::Rejected);
    assert!(!friendship.is_accepted());
}

#[test]
fn test_decided_friendship_cannot_be_decided_again() {
    let mut friendship = pending(Uuid::new_v4(), Uuid::new_v4());
    friendship.decide(FriendshipDecision::Accepted).unwrap();

    let result = friendship.decide(FriendshipDecision::Rejected);

    assert!(matches!(
        result,
        Err(CoreError::InvalidTransition {
            from: FriendshipStatus::Accepted,
            to: FriendshipStatus::Rejected,
            ..
        })
    ));
    assert_eq!(friendship.status, FriendshipStatus::Accepted);
}
