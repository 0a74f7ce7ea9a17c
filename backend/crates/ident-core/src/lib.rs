pub mod error;
pub mod models;
pub mod scope;
pub mod token_digest;
pub mod validation;
pub mod validator;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::credential::Credential;
pub use models::identity::Identity;
pub use models::identity_response::IdentityResponse;
pub use models::identity_summary::IdentitySummary;
pub use token_digest::TokenDigest;
pub use validation::{validate_identity, validate_password};
pub use validator::Validator;

#[cfg(test)]
mod tests;
