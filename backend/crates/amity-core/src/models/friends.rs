use crate::Friendship;

use uuid::Uuid;

/// Lazily project `user`'s friends out of their friendship rows.
///
/// Only accepted rows count. Rows that do not involve `user` are skipped,
/// so the iterator never yields `user` itself.
pub fn friends_of(
    friendships: &[Friendship],
    user: Uuid,
) -> impl Iterator<Item = Uuid> + Clone + '_ {
    friendships
        .iter()
        .filter(|f| f.is_accepted())
        .filter_map(move |f| f.other_party(user))
}
