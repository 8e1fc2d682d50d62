use crate::{FriendshipRepository, StoreError, StoreResult};

use amity_core::{
    CoreError, Friendship, FriendshipDecision, FriendshipStatus, NewFriendship, friends_of,
};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::{Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

const BEGIN_IMMEDIATE: &str = "BEGIN IMMEDIATE";

/// Owns the friendship relation.
///
/// The acting user is always passed in explicitly. Check-then-act sequences
/// run inside a single `BEGIN IMMEDIATE` transaction, so concurrent writers
/// are serialised. The schema's unique pair index and the conditional status
/// update keep the invariants intact regardless.
#[derive(Clone)]
pub struct FriendshipStore {
    pool: SqlitePool,
}

impl FriendshipStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Every friendship row `user` takes part in, in any status.
    pub async fn friendships(&self, user: Uuid) -> StoreResult<Vec<Friendship>> {
        let friendships = FriendshipRepository::find_by_user(&self.pool, user).await?;
        Ok(friendships)
    }

    /// Ids of the users `user` has an accepted friendship with.
    pub async fn friends(&self, user: Uuid) -> StoreResult<Vec<Uuid>> {
        let friendships = self.friendships(user).await?;
        Ok(friends_of(&friendships, user).collect())
    }

    /// Send a friendship request from `requester` to `target`.
    pub async fn request(&self, requester: Uuid, target: Uuid) -> StoreResult<Friendship> {
        let new_friendship = NewFriendship::new(requester, target).map_err(|e| {
            log::debug!("Rejected friendship request: {}", e);
            StoreError::InvalidOperation {
                message: "You cannot create a friendship with yourself".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let mut tx = self.begin_write().await?;

        if let Some(existing) =
            FriendshipRepository::find_by_pair(&mut *tx, requester, target).await?
        {
            log::debug!(
                "Friendship {} already links {} and {} ({})",
                existing.id,
                requester,
                target,
                existing.status
            );
            return Err(Self::pair_conflict(existing.id));
        }

        let friendship = match FriendshipRepository::create(&mut *tx, &new_friendship).await {
            Ok(friendship) => friendship,
            // Another writer inserted the pair between our check and insert.
            Err(e) if e.is_unique_violation() => {
                log::warn!(
                    "Concurrent friendship request between {} and {}",
                    requester,
                    target
                );
                return Err(StoreError::Conflict {
                    message: "A friendship between these users already exists".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => return Err(e.into()),
        };

        tx.commit().await?;

        log::info!(
            "Created friendship {} ({} -> {})",
            friendship.id,
            friendship.user1,
            friendship.user2
        );

        Ok(friendship)
    }

    /// Accept or reject a pending friendship. `responder` must be one of
    /// its two participants.
    pub async fn respond(
        &self,
        friendship_id: i64,
        responder: Uuid,
        decision: FriendshipDecision,
    ) -> StoreResult<Friendship> {
        let mut tx = self.begin_write().await?;

        let mut friendship = FriendshipRepository::find_by_id(&mut *tx, friendship_id)
            .await?
            .ok_or_else(|| StoreError::NotFound {
                message: format!("Friendship {} not found", friendship_id),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !friendship.involves(responder) {
            log::warn!(
                "User {} tried to respond to friendship {} they are not part of",
                responder,
                friendship_id
            );
            return Err(StoreError::InvalidOperation {
                message: format!(
                    "You are not a participant of friendship {}",
                    friendship_id
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        friendship
            .decide(decision)
            .map_err(|e| Self::already_decided(friendship_id, e))?;

        let updated = FriendshipRepository::update_status(
            &mut *tx,
            friendship_id,
            FriendshipStatus::Pending,
            friendship.status,
            friendship.updated_at,
        )
        .await?;

        if !updated {
            log::warn!(
                "Friendship {} was decided concurrently; dropping {} by {}",
                friendship_id,
                friendship.status,
                responder
            );
            return Err(StoreError::InvalidState {
                message: format!("Friendship {} is no longer pending", friendship_id),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        tx.commit().await?;

        log::info!(
            "Friendship {} {} by {}",
            friendship_id,
            friendship.status,
            responder
        );

        Ok(friendship)
    }

    /// Transaction that holds the write lock from `BEGIN`. Concurrent
    /// writers queue on the busy timeout and then read committed state.
    async fn begin_write(&self) -> StoreResult<Transaction<'static, Sqlite>> {
        let tx = self.pool.begin_with(BEGIN_IMMEDIATE).await?;
        Ok(tx)
    }

    #[track_caller]
    fn pair_conflict(existing_id: i64) -> StoreError {
        StoreError::Conflict {
            message: format!(
                "You cannot create a new friendship with an existing friend (friendship {})",
                existing_id
            ),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    fn already_decided(friendship_id: i64, e: CoreError) -> StoreError {
        let message = match e {
            CoreError::InvalidTransition { from, .. } => {
                format!("Friendship {} has already been {}", friendship_id, from)
            }
            other => other.to_string(),
        };

        StoreError::InvalidState {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
