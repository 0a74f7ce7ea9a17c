use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::collections::BTreeMap;
use std::panic::Location;

/// Collects field-level validation errors.
///
/// Only the first error recorded against a field is kept, so rules should be checked
/// from most to least fundamental.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    errors: BTreeMap<String, String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    /// Record `message` against `field` unless `ok` holds
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add_error(field, message);
        }
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Turn the collected errors into a single bulk result.
    #[track_caller]
    pub fn finish(self) -> CoreErrorResult<()> {
        if self.valid() {
            return Ok(());
        }

        Err(CoreError::Validation {
            errors: self.errors,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
