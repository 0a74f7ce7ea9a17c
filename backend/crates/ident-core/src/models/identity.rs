//! Identity entity - a user account record.

use crate::{Credential, IdentityResponse, IdentitySummary};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A user account.
///
/// `id`, `created_at` and `version` are assigned by storage on insert and hold their zero
/// values until then.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub credential: Credential,
    pub activated: bool,
    pub created_at: DateTime<Utc>,
    /// Change-detection token, assigned by storage
    pub version: Uuid,
}

impl Identity {
    /// Create an unsaved, unactivated identity with no credential yet
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
            credential: Credential::default(),
            activated: false,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            version: Uuid::nil(),
        }
    }

    /// Check if storage has assigned an id yet
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }

    pub fn summary(&self) -> IdentitySummary {
        IdentitySummary {
            id: self.id,
            name: self.name.clone(),
        }
    }

    pub fn to_response(&self) -> IdentityResponse {
        IdentityResponse::from(self)
    }
}
