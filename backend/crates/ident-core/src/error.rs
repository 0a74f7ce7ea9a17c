use crate::ErrorLocation;

use std::collections::BTreeMap;
use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

const GENERIC_FAILURE_MESSAGE: &str = "the server encountered a problem and could not process your request";

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation failed: {} {location}", describe_field_errors(.errors))]
    Validation {
        errors: BTreeMap<String, String>,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {source} {location}")]
    Hashing {
        #[source]
        source: argon2::password_hash::Error,
        location: ErrorLocation,
    },

    #[error("Stored credential hash is unusable: {message} {location}")]
    Comparison {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn hashing(source: argon2::password_hash::Error) -> Self {
        Self::Hashing {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn comparison<S: Into<String>>(message: S) -> Self {
        Self::Comparison {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Hashing { .. } | Self::Comparison { .. } => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show an end user. Internal details never leak through here.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { errors, .. } => describe_field_errors(errors),
            Self::Hashing { .. } | Self::Comparison { .. } => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn field_errors(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

fn describe_field_errors(errors: &BTreeMap<String, String>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = StdResult<T, CoreError>;
