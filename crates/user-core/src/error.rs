//! Validation errors for user records.

use chrono::NaiveDate;
use thiserror::Error;

/// Reasons a user record or a full name is rejected.
///
/// These are raised synchronously while building a [`crate::User`] and
/// never reach storage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// First name is empty or whitespace.
    #[error("First name cannot be empty.")]
    EmptyFirstName,

    /// Last name is empty or whitespace.
    #[error("Last name cannot be empty.")]
    EmptyLastName,

    /// Birthday lies after the construction date.
    #[error("Birthday cannot be in the future: {birthday} is after {today}.")]
    FutureBirthday { birthday: NaiveDate, today: NaiveDate },

    /// Full name has fewer than two tokens.
    #[error("Full name must contain at least a last name and a first name, got '{input}'.")]
    IncompleteFullName { input: String },
}
