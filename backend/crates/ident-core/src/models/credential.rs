//! Password credential: transient plaintext, permanent one-way hash.

use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use zeroize::Zeroizing;

/// Argon2id PHC string with the default cost parameters. No password produces this output.
pub(crate) const DECOY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$ZGVjb3lzYWx0MTZieXRlcw$AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8";

/// Password material for an identity.
///
/// The plaintext is only held between [`Credential::create`] and persistence so the
/// validation rules can inspect it. It is zeroized on drop, excluded from `Debug`, and
/// there is no serde implementation for this type at all.
#[derive(Clone, Default)]
pub struct Credential {
    plaintext: Option<Zeroizing<String>>,
    hash: Option<String>,
}

impl Credential {
    /// Rebuild a credential from a hash read back out of storage.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self {
            plaintext: None,
            hash: Some(hash.into()),
        }
    }

    /// Derive a salted Argon2id hash (default cost) from `plaintext`.
    #[track_caller]
    pub fn create(&mut self, plaintext: &str) -> CoreErrorResult<()> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(CoreError::hashing)?
            .to_string();

        self.plaintext = Some(Zeroizing::new(plaintext.to_owned()));
        self.hash = Some(hash);
        Ok(())
    }

    /// Check `candidate` against the stored hash.
    ///
    /// A wrong password is `Ok(false)`. Errors are reserved for a stored hash that is
    /// missing or cannot be parsed.
    #[track_caller]
    pub fn matches(&self, candidate: &str) -> CoreErrorResult<bool> {
        let Some(stored) = self.hash.as_deref() else {
            return Err(CoreError::comparison("no hash has been derived"));
        };

        let parsed = PasswordHash::new(stored)
            .map_err(|e| CoreError::comparison(format!("malformed hash: {e}")))?;

        match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(CoreError::comparison(e.to_string())),
        }
    }

    /// Run a full verification against a throwaway hash and discard the outcome.
    ///
    /// Rejecting an unknown account this way takes as long as rejecting a wrong password.
    pub fn verify_decoy(candidate: &str) {
        let _ = Self::from_hash(DECOY_HASH).matches(candidate);
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    pub fn has_hash(&self) -> bool {
        self.hash.as_deref().is_some_and(|h| !h.is_empty())
    }

    pub fn has_plaintext(&self) -> bool {
        self.plaintext.is_some()
    }

    pub(crate) fn plaintext(&self) -> Option<&str> {
        self.plaintext.as_deref().map(String::as_str)
    }

    /// Drop the plaintext once it is no longer needed.
    pub fn forget_plaintext(&mut self) {
        self.plaintext = None;
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |present: bool| if present { "<redacted>" } else { "<none>" };
        f.debug_struct("Credential")
            .field("plaintext", &redact(self.plaintext.is_some()))
            .field("hash", &redact(self.hash.is_some()))
            .finish()
    }
}
