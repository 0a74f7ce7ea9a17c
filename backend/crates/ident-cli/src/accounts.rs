use crate::{CliError, Result as CliResult};

use ident_core::{
    Credential, Identity, IdentityResponse, IdentitySummary, Validator, validate_identity,
    validate_password,
};
use ident_db::{DbError, IdentityRepository, QueryTimeouts, TokenResolver};

use log::{debug, info};
use sqlx::SqlitePool;

/// Account workflows: registration, password checks and token lookups.
pub struct AccountService {
    identities: IdentityRepository,
    tokens: TokenResolver,
}

impl AccountService {
    pub fn new(pool: SqlitePool, timeouts: QueryTimeouts) -> Self {
        Self {
            identities: IdentityRepository::with_timeouts(pool.clone(), timeouts),
            tokens: TokenResolver::with_timeouts(pool, timeouts),
        }
    }

    /// Validate, then hash and persist a new identity.
    ///
    /// Every validation problem is reported at once; nothing is stored unless all pass.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> CliResult<Identity> {
        let mut identity = Identity::new(name, email);

        let mut v = Validator::new();
        validate_identity(&mut v, &identity);
        validate_password(&mut v, password);
        v.finish()?;

        identity.credential.create(password)?;

        self.identities.create(&mut identity).await?;
        info!("Registered identity {}", identity.id);

        Ok(identity)
    }

    /// Check an email/password pair.
    ///
    /// An unknown email and a wrong password produce the same error.
    pub async fn authenticate(&self, email: &str, password: &str) -> CliResult<IdentityResponse> {
        let identity = match self.identities.find_by_email(email).await {
            Ok(identity) => identity,
            Err(DbError::NotFound { .. }) => {
                Credential::verify_decoy(password);
                return Err(CliError::invalid_credentials());
            }
            Err(e) => return Err(e.into()),
        };

        if !identity.credential.matches(password)? {
            debug!("Password mismatch for identity {}", identity.id);
            return Err(CliError::invalid_credentials());
        }

        Ok(identity.to_response())
    }

    pub async fn find_by_email(&self, email: &str) -> CliResult<IdentityResponse> {
        Ok(self.identities.find_by_email(email).await?.to_response())
    }

    pub async fn summary(&self, id: i64) -> CliResult<IdentitySummary> {
        Ok(self.identities.find_summary_by_id(id).await?)
    }

    pub async fn list_others(&self, exclude: i64) -> CliResult<Vec<IdentitySummary>> {
        Ok(self.identities.list_excluding(exclude).await?)
    }

    pub async fn resolve_token(&self, token: &str, scope: &str) -> CliResult<IdentityResponse> {
        Ok(self.tokens.resolve_identity(token, scope).await?.to_response())
    }
}
