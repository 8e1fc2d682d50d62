use crate::{DbError, Result as DbErrorResult};

use amity_core::User;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    email: String,
    username: String,
    created_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    #[track_caller]
    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: Uuid::parse_str(&r.id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in user.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            email: r.email,
            username: r.username,
            created_at: DateTime::from_timestamp(r.created_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in user.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        let id = user.id.to_string();
        let created_at = user.created_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO users (id, email, username, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&user.email)
        .bind(&user.username)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let id_str = id.to_string();

        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, email, username, created_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// Fetch several users at once. Unknown ids are skipped; the result
    /// follows the order of `ids`.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> DbErrorResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, email, username, created_at FROM users WHERE id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id.to_string());
        }
        separated.push_unseparated(")");

        let rows = builder
            .build_query_as::<UserRow>()
            .fetch_all(&self.pool)
            .await?;

        let mut users = rows
            .into_iter()
            .map(User::try_from)
            .collect::<DbErrorResult<Vec<_>>>()?;

        users.sort_by_key(|u| ids.iter().position(|id| *id == u.id));

        Ok(users)
    }
}
