use crate::repositories::identity_row::{
    IDENTITY_COLUMNS, IdentityRow, parse_timestamp, parse_version,
};
use crate::timeouts::with_deadline;
use crate::{DbError, QueryTimeouts, Result as DbErrorResult};

use ident_core::{ErrorLocation, Identity, IdentitySummary};

use std::panic::Location;

use log::{debug, error};
use sqlx::SqlitePool;

pub struct IdentityRepository {
    pool: SqlitePool,
    timeouts: QueryTimeouts,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_timeouts(pool, QueryTimeouts::default())
    }

    pub fn with_timeouts(pool: SqlitePool, timeouts: QueryTimeouts) -> Self {
        Self { pool, timeouts }
    }

    /// Persist a new identity and fill in the id, created_at and version storage assigned.
    ///
    /// The credential must already be hashed; an identity without a hash is rejected before
    /// any query is issued. On success the transient plaintext is dropped.
    pub async fn create(&self, identity: &mut Identity) -> DbErrorResult<()> {
        let Some(password_hash) = identity.credential.hash().filter(|h| !h.is_empty()) else {
            error!("create called for an identity whose credential was never hashed");
            return Err(DbError::MissingCredentialHash {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let inserted = with_deadline(
            Location::caller(),
            "insert identity",
            self.timeouts.write,
            sqlx::query_as::<_, (i64, i64, String)>(
                r#"
                  INSERT INTO users (name, email, password_hash, activated)
                  VALUES (?, ?, ?, ?)
                  RETURNING id, created_at, version
                  "#,
            )
            .bind(&identity.name)
            .bind(&identity.email)
            .bind(password_hash)
            .bind(identity.activated)
            .fetch_one(&self.pool),
        )
        .await?;

        let (id, created_at, version) = match inserted {
            Ok(row) => row,
            Err(e) if is_duplicate_email(&e) => {
                return Err(DbError::DuplicateEmail {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => return Err(DbError::from(e)),
        };

        identity.id = id;
        identity.created_at = parse_timestamp(created_at)?;
        identity.version = parse_version(&version)?;
        identity.credential.forget_plaintext();

        debug!("Created identity {}", identity.id);

        Ok(())
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Identity> {
        let sql = format!("SELECT {IDENTITY_COLUMNS} FROM users WHERE email = ?");

        let row = with_deadline(
            Location::caller(),
            "find identity by email",
            self.timeouts.read,
            sqlx::query_as::<_, IdentityRow>(&sql)
                .bind(email)
                .fetch_optional(&self.pool),
        )
        .await??;

        row.ok_or_else(DbError::not_found)?.try_into()
    }

    pub async fn find_summary_by_id(&self, id: i64) -> DbErrorResult<IdentitySummary> {
        let row = with_deadline(
            Location::caller(),
            "find identity summary",
            self.timeouts.read,
            sqlx::query_as::<_, (i64, String)>("SELECT id, name FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await??;

        let (id, name) = row.ok_or_else(DbError::not_found)?;
        Ok(IdentitySummary { id, name })
    }

    /// Every identity except `exclude`, ordered by id. Empty rather than an error when
    /// nothing else exists.
    pub async fn list_excluding(&self, exclude: i64) -> DbErrorResult<Vec<IdentitySummary>> {
        let rows = with_deadline(
            Location::caller(),
            "list identities",
            self.timeouts.read,
            sqlx::query_as::<_, (i64, String)>(
                r#"
                  SELECT id, name
                  FROM users
                  WHERE id != ?
                  ORDER BY id ASC
                  "#,
            )
            .bind(exclude)
            .fetch_all(&self.pool),
        )
        .await??;

        Ok(rows
            .into_iter()
            .map(|(id, name)| IdentitySummary { id, name })
            .collect())
    }
}

fn is_duplicate_email(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.is_unique_violation() && db_err.message().contains("users.email")
        }
        _ => false,
    }
}
