use ident_core::ErrorLocation;

use std::panic::Location;
use std::time::Duration;

use thiserror::Error;

const GENERIC_FAILURE_MESSAGE: &str = "the server encountered a problem and could not process your request";

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("{operation} did not complete within {limit:?} {location}")]
    Timeout {
        operation: &'static str,
        limit: Duration,
        location: ErrorLocation,
    },

    #[error("Malformed row: {message} {location}")]
    MalformedRow {
        message: String,
        location: ErrorLocation,
    },

    /// No matching record. Deliberately carries no detail about why.
    #[error("Record not found {location}")]
    NotFound { location: ErrorLocation },

    #[error("Duplicate email {location}")]
    DuplicateEmail { location: ErrorLocation },

    /// Caller tried to persist an identity whose credential was never hashed.
    #[error("Refusing to persist identity without a credential hash {location}")]
    MissingCredentialHash { location: ErrorLocation },
}

impl DbError {
    #[track_caller]
    pub fn not_found() -> Self {
        Self::NotFound {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed_row<S: Into<String>>(message: S) -> Self {
        Self::MalformedRow {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Connection errors, timeouts, bad rows: everything callers cannot act on.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            Self::Sqlx { .. }
                | Self::Migration { .. }
                | Self::Initialization { .. }
                | Self::Timeout { .. }
                | Self::MalformedRow { .. }
        )
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
            Self::MissingCredentialHash { .. } => "CONTRACT_VIOLATION",
            _ => "INTERNAL_ERROR",
        }
    }

    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::DuplicateEmail { .. } => Some("email"),
            _ => None,
        }
    }

    /// Message safe to show an end user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "invalid or expired",
            Self::DuplicateEmail { .. } => "a user with this email address already exists",
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
