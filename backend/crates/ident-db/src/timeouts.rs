use crate::{DbError, Result as DbErrorResult};

use ident_core::ErrorLocation;

use std::future::Future;
use std::panic::Location;
use std::time::Duration;

use log::warn;

pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(3);
pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(4);

/// Upper bounds for a single storage round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTimeouts {
    pub read: Duration,
    pub write: Duration,
}

impl QueryTimeouts {
    pub fn new(read: Duration, write: Duration) -> Self {
        Self { read, write }
    }

    pub fn uniform(limit: Duration) -> Self {
        Self::new(limit, limit)
    }
}

impl Default for QueryTimeouts {
    fn default() -> Self {
        Self::new(DEFAULT_READ_TIMEOUT, DEFAULT_WRITE_TIMEOUT)
    }
}

/// Run `query` under a deadline.
///
/// Expiry is reported as [`DbError::Timeout`]. The query future is dropped at that point,
/// which hands any pooled connection it held back to the pool. The inner sqlx result is
/// returned untouched so callers can translate specific database errors themselves.
/// `location` is the repository call site a timeout error should point at.
pub(crate) async fn with_deadline<T, F>(
    location: &'static Location<'static>,
    operation: &'static str,
    limit: Duration,
    query: F,
) -> DbErrorResult<Result<T, sqlx::Error>>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, query).await {
        Ok(result) => Ok(result),
        Err(_) => {
            warn!("{operation} timed out after {limit:?}");
            Err(DbError::Timeout {
                operation,
                limit,
                location: ErrorLocation::from(location),
            })
        }
    }
}
