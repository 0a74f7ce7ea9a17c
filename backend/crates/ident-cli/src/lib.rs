//! ident-cli library
//!
//! Account workflows shared by the `ident` binary and its tests.

pub mod accounts;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use accounts::AccountService;
pub use error::{CliError, Result};
