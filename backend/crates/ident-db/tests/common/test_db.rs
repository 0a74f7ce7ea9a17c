use ident_core::TokenDigest;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    ident_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a token row the way an upstream issuer would: only the digest is stored
pub async fn insert_test_token(
    pool: &SqlitePool,
    token: &str,
    user_id: i64,
    scope: &str,
    expiry: DateTime<Utc>,
) {
    let digest = TokenDigest::of(token);

    sqlx::query("INSERT INTO tokens (hash, user_id, expiry, scope) VALUES (?, ?, ?, ?)")
        .bind(digest.as_bytes())
        .bind(user_id)
        .bind(expiry.timestamp())
        .bind(scope)
        .execute(pool)
        .await
        .expect("Failed to create test token");
}
