//! Error types for the user store.

use thiserror::Error;
use user_core::{UserId, ValidationError};

/// Errors that can occur while storing or querying users.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Input rejected before reaching storage.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// PostgreSQL connection, statement or COPY error.
    #[error("PostgreSQL error: {0}")]
    Storage(#[from] tokio_postgres::Error),

    /// No row with this id.
    #[error("User with id {0} not found")]
    NotFound(UserId),

    /// The user was never inserted, so it has no id to address.
    #[error("User has no id; insert it before updating")]
    Unsaved,
}

impl StoreError {
    /// Whether this is the expected "row absent" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
