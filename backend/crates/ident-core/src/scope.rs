//! Well-known token scope labels.
//!
//! A token is only ever resolved against the exact scope it was issued for, so an
//! activation token cannot be replayed as an authentication token.

pub const ACTIVATION: &str = "activation";
pub const AUTHENTICATION: &str = "authentication";
pub const PASSWORD_RESET: &str = "password-reset";
