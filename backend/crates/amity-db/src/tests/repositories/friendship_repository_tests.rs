use crate::{Database, DbError, FriendshipRepository};

use chrono::Utc;
use sqlx::SqlitePool;

async fn setup_db() -> SqlitePool {
    Database::connect_in_memory()
        .await
        .expect("Failed to create test database")
}

async fn seed_raw_user(pool: &SqlitePool, id: &str) {
    sqlx::query("INSERT INTO users (id, email, username, created_at) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(format!("{}@example.com", id))
        .bind(id)
        .bind(Utc::now().timestamp())
        .execute(pool)
        .await
        .expect("Failed to seed user");
}

#[tokio::test]
async fn given_row_with_malformed_user_id_when_loaded_then_initialization_error() {
    let pool = setup_db().await;
    seed_raw_user(&pool, "not-a-uuid").await;
    let other = uuid::Uuid::new_v4().to_string();
    seed_raw_user(&pool, &other).await;

    let now = Utc::now().timestamp();
    sqlx::query(
        "INSERT INTO friendships (id, user1_id, user2_id, status, created_at, updated_at) VALUES (7, ?, ?, 'PENDING', ?, ?)",
    )
    .bind("not-a-uuid")
    .bind(&other)
    .bind(now)
    .bind(now)
    .execute(&pool)
    .await
    .expect("Failed to seed friendship");

    let result = FriendshipRepository::find_by_id(&pool, 7).await;

    match result {
        Err(DbError::Initialization { message, .. }) => {
            assert!(message.contains("friendship.user1_id"));
        }
        other => panic!("expected initialization error, got {:?}", other),
    }
}

#[tokio::test]
async fn given_unknown_status_value_when_inserted_then_check_constraint_rejects_it() {
    let pool = setup_db().await;
    let a = uuid::Uuid::new_v4().to_string();
    let b = uuid::Uuid::new_v4().to_string();
    seed_raw_user(&pool, &a).await;
    seed_raw_user(&pool, &b).await;

    let now = Utc::now().timestamp();
    let result = sqlx::query(
        "INSERT INTO friendships (user1_id, user2_id, status, created_at, updated_at) VALUES (?, ?, 'BLOCKED', ?, ?)",
    )
    .bind(&a)
    .bind(&b)
    .bind(now)
    .bind(now)
    .execute(&pool)
    .await;

    assert!(result.is_err());
}
