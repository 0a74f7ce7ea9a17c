//! Rules that gate what may become a persisted identity.
//!
//! These never fail; they append to a [`Validator`] and leave it to the caller to stop
//! before persistence when anything was recorded.

use crate::{Identity, Validator};

pub const MAX_NAME_LENGTH: usize = 100;
/// Password bounds are in bytes; 72 is the most input an adaptive hash is expected to take.
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 72;

const IS_BLANK: &str = "is blank";

pub fn validate_identity(v: &mut Validator, identity: &Identity) {
    v.check(!identity.name.is_empty(), "name", IS_BLANK);
    v.check(
        identity.name.chars().count() <= MAX_NAME_LENGTH,
        "name",
        "must not exceed 100 chars",
    );

    v.check(!identity.email.is_empty(), "email", IS_BLANK);

    if let Some(plaintext) = identity.credential.plaintext() {
        validate_password(v, plaintext);
    }
}

pub fn validate_password(v: &mut Validator, password: &str) {
    v.check(!password.is_empty(), "password", IS_BLANK);
    v.check(
        password.len() >= MIN_PASSWORD_LENGTH,
        "password",
        "must be at least 8 chars long",
    );
    v.check(
        password.len() <= MAX_PASSWORD_LENGTH,
        "password",
        "must not exceed 72 chars",
    );
}
