use crate::{CoreError, NewFriendship};

use uuid::Uuid;

#[test]
fn test_new_friendship_keeps_requester_first() {
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let request = NewFriendship::new(alice, bob).unwrap();

    assert_eq!(request.user1(), alice);
    assert_eq!(request.user2(), bob);
}

#[test]
fn test_new_friendship_with_self_is_rejected() {
    let alice = Uuid::new_v4();

    let result = NewFriendship::new(alice, alice);

    assert!(matches!(
        result,
        Err(CoreError::SelfFriendship { user_id, .. }) if user_id == alice
    ));
}
