use crate::repositories::identity_row::{IDENTITY_COLUMNS, IdentityRow};
use crate::timeouts::with_deadline;
use crate::{DbError, QueryTimeouts, Result as DbErrorResult};

use ident_core::{Identity, TokenDigest};

use std::panic::Location;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Resolves opaque bearer tokens to the identity they were issued for.
///
/// A token matches only when its digest, its scope and a future expiry all line up.
/// Every miss is the same [`DbError::NotFound`], whichever condition failed.
pub struct TokenResolver {
    pool: SqlitePool,
    timeouts: QueryTimeouts,
}

impl TokenResolver {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_timeouts(pool, QueryTimeouts::default())
    }

    pub fn with_timeouts(pool: SqlitePool, timeouts: QueryTimeouts) -> Self {
        Self { pool, timeouts }
    }

    pub async fn resolve_identity(&self, token: &str, scope: &str) -> DbErrorResult<Identity> {
        self.resolve_identity_at(token, scope, Utc::now()).await
    }

    /// Same as [`resolve_identity`](Self::resolve_identity), with expiry judged against `now`.
    pub async fn resolve_identity_at(
        &self,
        token: &str,
        scope: &str,
        now: DateTime<Utc>,
    ) -> DbErrorResult<Identity> {
        let digest = TokenDigest::of(token);
        let sql = format!(
            r#"
              SELECT {IDENTITY_COLUMNS}
              FROM users
              INNER JOIN tokens ON users.id = tokens.user_id
              WHERE tokens.hash = ? AND tokens.scope = ? AND tokens.expiry > ?
              "#
        );

        let row = with_deadline(
            Location::caller(),
            "resolve token",
            self.timeouts.read,
            sqlx::query_as::<_, IdentityRow>(&sql)
                .bind(digest.as_bytes())
                .bind(scope)
                .bind(now.timestamp())
                .fetch_optional(&self.pool),
        )
        .await??;

        row.ok_or_else(DbError::not_found)?.try_into()
    }
}
