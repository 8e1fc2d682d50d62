use crate::{DbError, Result as DbErrorResult};

use amity_core::{Friendship, FriendshipStatus, NewFriendship};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

const FRIENDSHIP_COLUMNS: &str = "id, user1_id, user2_id, status, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct FriendshipRow {
    id: i64,
    user1_id: String,
    user2_id: String,
    status: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<FriendshipRow> for Friendship {
    type Error = DbError;

    #[track_caller]
    fn try_from(r: FriendshipRow) -> DbErrorResult<Self> {
        Ok(Friendship {
            id: r.id,
            user1: Uuid::parse_str(&r.user1_id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in friendship.user1_id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            user2: Uuid::parse_str(&r.user2_id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in friendship.user2_id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            status: FriendshipStatus::from_str(&r.status).map_err(|e| {
                DbError::Initialization {
                    message: format!("Invalid FriendshipStatus in friendship.status: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            created_at: DateTime::from_timestamp(r.created_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in friendship.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            updated_at: DateTime::from_timestamp(r.updated_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in friendship.updated_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}

/// Stateless access to the `friendships` table.
///
/// Every method takes an executor so callers can run several statements in
/// one transaction.
pub struct FriendshipRepository;

impl FriendshipRepository {
    /// Insert a pending friendship and return the stored row with its id.
    pub async fn create<'e, E>(executor: E, request: &NewFriendship) -> DbErrorResult<Friendship>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let user1 = request.user1().to_string();
        let user2 = request.user2().to_string();
        let status = FriendshipStatus::Pending.as_str();
        let now = Utc::now().timestamp();

        let sql = format!(
            r#"
                INSERT INTO friendships (user1_id, user2_id, status, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
                RETURNING {FRIENDSHIP_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, FriendshipRow>(&sql)
            .bind(user1)
            .bind(user2)
            .bind(status)
            .bind(now)
            .bind(now)
            .fetch_one(executor)
            .await?;

        Friendship::try_from(row)
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<Friendship>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("SELECT {FRIENDSHIP_COLUMNS} FROM friendships WHERE id = ?");

        let row = sqlx::query_as::<_, FriendshipRow>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        row.map(Friendship::try_from).transpose()
    }

    /// Every row where `user` is either participant, oldest first.
    pub async fn find_by_user<'e, E>(executor: E, user: Uuid) -> DbErrorResult<Vec<Friendship>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let user_str = user.to_string();
        let sql = format!(
            r#"
                SELECT {FRIENDSHIP_COLUMNS}
                FROM friendships
                WHERE user1_id = ? OR user2_id = ?
                ORDER BY id ASC
            "#
        );

        let rows = sqlx::query_as::<_, FriendshipRow>(&sql)
            .bind(&user_str)
            .bind(&user_str)
            .fetch_all(executor)
            .await?;

        rows.into_iter()
            .map(Friendship::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// The row for the unordered pair `{a, b}`, in either column order.
    pub async fn find_by_pair<'e, E>(
        executor: E,
        a: Uuid,
        b: Uuid,
    ) -> DbErrorResult<Option<Friendship>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let a_str = a.to_string();
        let b_str = b.to_string();
        let sql = format!(
            r#"
                SELECT {FRIENDSHIP_COLUMNS}
                FROM friendships
                WHERE (user1_id = ? AND user2_id = ?)
                   OR (user1_id = ? AND user2_id = ?)
            "#
        );

        let row = sqlx::query_as::<_, FriendshipRow>(&sql)
            .bind(&a_str)
            .bind(&b_str)
            .bind(&b_str)
            .bind(&a_str)
            .fetch_optional(executor)
            .await?;

        row.map(Friendship::try_from).transpose()
    }

    /// Compare-and-set on `status`. Returns false when the row is gone or
    /// no longer in `expected`.
    pub async fn update_status<'e, E>(
        executor: E,
        id: i64,
        expected: FriendshipStatus,
        next: FriendshipStatus,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE friendships
                SET status = ?, updated_at = ?
                WHERE id = ? AND status = ?
            "#,
        )
        .bind(next.as_str())
        .bind(updated_at.timestamp())
        .bind(id)
        .bind(expected.as_str())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
