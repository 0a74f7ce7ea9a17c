
use ident_db::QueryTimeouts;

use crate::AccountService;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Account service over a fresh in-memory database
pub(crate) async fn create_test_service() -> AccountService {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    ident_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    AccountService::new(pool, QueryTimeouts::default())
}
