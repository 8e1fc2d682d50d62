use crate::{Friendship, FriendshipStatus, friends_of};

use chrono::Utc;
use uuid::Uuid;

fn row(id: i64, user1: Uuid, user2: Uuid, status: FriendshipStatus) -> Friendship {
    let now = Utc::now();
    Friendship {
        id,
        user1,
        user2,
        status,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_friends_of_yields_other_party_of_accepted_rows() {
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let carol = Uuid::new_v4();
    let dave = Uuid::new_v4();

    let rows = vec![
        row(1, alice, bob, FriendshipStatus::Accepted),
        row(2, carol, alice, FriendshipStatus::Accepted),
        row(3, alice, dave, FriendshipStatus::Pending),
        row(4, dave, alice, FriendshipStatus::Rejected),
    ];

    let friends: Vec<Uuid> = friends_of(&rows, alice).collect();

    assert_eq!(friends, vec![bob, carol]);
}

#[test]
fn test_friends_of_never_yields_the_user_or_strangers() {
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let carol = Uuid::new_v4();

    let rows = vec![row(1, bob, carol, FriendshipStatus::Accepted)];

    assert_eq!(friends_of(&rows, alice).count(), 0);
}

#[test]
fn test_friends_of_is_restartable() {
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let rows = vec![row(1, alice, bob, FriendshipStatus::Accepted)];

    let friends = friends_of(&rows, alice);
    let first: Vec<Uuid> = friends.clone().collect();
    let second: Vec<Uuid> = friends.collect();

    assert_eq!(first, second);
}
