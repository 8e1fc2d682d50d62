use amity_core::FriendshipStatus;

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Inserts a user named `username` and returns its id
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> Uuid {
    let user_id = Uuid::new_v4();

    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    sqlx::query("INSERT INTO users (id, email, username, created_at) VALUES (?, ?, ?, ?)")
        .bind(user_id.to_string())
        .bind(format!("{}@example.com", username))
        .bind(username)
        .bind(Utc::now().timestamp())
        .execute(pool)
        .await
        .expect("Failed to create test user");

    user_id
}

/// Inserts a friendship row with an explicit id and status
pub async fn create_test_friendship(
    pool: &SqlitePool,
    id: i64,
    user1: Uuid,
    user2: Uuid,
    status: FriendshipStatus,
) {
    let now = Utc::now().timestamp();

    sqlx::query(
        r#"
            INSERT INTO friendships (id, user1_id, user2_id, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(user1.to_string())
    .bind(user2.to_string())
    .bind(status.as_str())
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test friendship");
}
