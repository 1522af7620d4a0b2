//! Request payload validation
//!
//! Validators are pure and run before any store is touched. Checks run in a
//! fixed order and the first failure wins.

mod rules;

pub use rules::{
    is_valid_email, validate_event_update, validate_login, validate_new_event,
    validate_registration, MIN_PASSWORD_LEN,
};

use thiserror::Error;

/// Field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
