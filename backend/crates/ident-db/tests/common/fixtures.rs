use ident_core::{Credential, Identity};
use ident_db::IdentityRepository;

/// Well-formed PHC string. Storage never inspects it, so tests that do not verify
/// passwords skip the cost of real hashing.
pub const FIXTURE_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$Zml4dHVyZXNhbHQ$VGhpcyBpcyBub3QgYSByZWFsIGhhc2g";

/// Creates an unsaved identity carrying a pre-hashed credential
pub fn create_test_identity(name: &str, email: &str) -> Identity {
    let mut identity = Identity::new(name, email);
    identity.credential = Credential::from_hash(FIXTURE_HASH);
    identity
}

/// Creates and persists an identity, returning it with storage-assigned fields populated
pub async fn persist_test_identity(repo: &IdentityRepository, name: &str, email: &str) -> Identity {
    let mut identity = create_test_identity(name, email);
    repo.create(&mut identity)
        .await
        .expect("Failed to persist test identity");
    identity
}
