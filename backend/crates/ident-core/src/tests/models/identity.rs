use crate::{Identity, IdentityResponse};

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[test]
fn test_identity_new() {
    let identity = Identity::new("Ada", "ada@x.com");

    assert_eq!(identity.id, 0);
    assert_eq!(identity.name, "Ada");
    assert_eq!(identity.email, "ada@x.com");
    assert!(!identity.activated);
    assert_eq!(identity.created_at, DateTime::<Utc>::UNIX_EPOCH);
    assert_eq!(identity.version, Uuid::nil());
    assert!(!identity.credential.has_hash());
    assert!(!identity.is_persisted());
}

#[test]
fn test_identity_to_response_omits_credential_and_version() {
    let mut identity = Identity::new("Ada", "ada@x.com");
    identity.id = 7;
    identity.activated = true;
    identity.version = Uuid::new_v4();
    identity.credential.create("longenough1").unwrap();

    let response = identity.to_response();
    assert_eq!(
        response,
        IdentityResponse {
            id: 7,
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            activated: true,
        }
    );

    let json = serde_json::to_value(&response).unwrap();
    let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 4);
    for key in ["id", "name", "email", "activated"] {
        assert!(keys.contains(&key), "missing {key}");
    }
    assert!(!json.to_string().contains("longenough1"));
}

#[test]
fn test_identity_summary() {
    let mut identity = Identity::new("Ada", "ada@x.com");
    identity.id = 3;

    let summary = identity.summary();

    assert_eq!(summary.id, 3);
    assert_eq!(summary.name, "Ada");
}
