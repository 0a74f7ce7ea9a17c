use crate::{DbError, Result as DbErrorResult};

use ident_core::{Credential, Identity};

use chrono::DateTime;
use uuid::Uuid;

/// Column set shared by every query that returns a full identity.
pub(crate) const IDENTITY_COLUMNS: &str =
    "users.id, users.name, users.email, users.password_hash, users.activated, users.created_at, users.version";

#[derive(sqlx::FromRow)]
pub(crate) struct IdentityRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub activated: bool,
    pub created_at: i64,
    pub version: String,
}

impl TryFrom<IdentityRow> for Identity {
    type Error = DbError;

    fn try_from(row: IdentityRow) -> DbErrorResult<Self> {
        Ok(Identity {
            id: row.id,
            name: row.name,
            email: row.email,
            credential: Credential::from_hash(row.password_hash),
            activated: row.activated,
            created_at: parse_timestamp(row.created_at)?,
            version: parse_version(&row.version)?,
        })
    }
}

pub(crate) fn parse_timestamp(seconds: i64) -> DbErrorResult<DateTime<chrono::Utc>> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| DbError::malformed_row(format!("created_at out of range: {seconds}")))
}

pub(crate) fn parse_version(raw: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| DbError::malformed_row(format!("version is not a UUID: {e}")))
}
