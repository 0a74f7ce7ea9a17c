use crate::Identity;

use serde::{Deserialize, Serialize};

/// Outward representation of an [`Identity`].
///
/// Credential material, `created_at` and `version` are deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub activated: bool,
}

impl From<&Identity> for IdentityResponse {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            name: identity.name.clone(),
            email: identity.email.clone(),
            activated: identity.activated,
        }
    }
}
