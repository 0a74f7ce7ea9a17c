use ident_config::ConfigError;
use ident_core::CoreError;
use ident_db::DbError;

use std::collections::BTreeMap;
use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

const INVALID_CREDENTIALS_MESSAGE: &str = "invalid authentication credentials";

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("{0}")]
    Db(#[from] DbError),

    /// Unknown email or wrong password; the two are never told apart.
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// What the person at the terminal gets to see.
    ///
    /// Configuration and logger problems are operator errors and are shown in full;
    /// everything coming out of the core goes through its own sanitized message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Core(e) => e.user_message(),
            Self::Db(e) => e.user_message().to_string(),
            Self::InvalidCredentials { .. } => INVALID_CREDENTIALS_MESSAGE.to_string(),
            Self::Config(_) | Self::Logger { .. } | Self::Json { .. } => self.to_string(),
        }
    }

    /// Per-field problems a caller can correct, if this error has any.
    pub fn field_errors(&self) -> Option<BTreeMap<String, String>> {
        match self {
            Self::Core(e) => e.field_errors().cloned(),
            Self::Db(e) => e
                .field()
                .map(|field| BTreeMap::from([(field.to_string(), e.user_message().to_string())])),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
