use serde::{Deserialize, Serialize};

/// Id and display name of an identity, for lookups that must not carry credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitySummary {
    pub id: i64,
    pub name: String,
}

impl IdentitySummary {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
