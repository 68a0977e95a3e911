//! Full-name parsing.

use crate::error::ValidationError;
use std::str::FromStr;

/// A full name split into its parts.
///
/// The input order is `Last First [Patronymic...]`: the first token is the
/// last name, the second the first name, and every remaining token is joined
/// back with single spaces into the patronymic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName {
    pub last_name: String,
    pub first_name: String,
    pub patronymic: Option<String>,
}

impl FullName {
    /// Parse a whitespace-separated full name.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let mut tokens = input.split_whitespace();

        let (Some(last_name), Some(first_name)) = (tokens.next(), tokens.next()) else {
            return Err(ValidationError::IncompleteFullName {
                input: input.to_string(),
            });
        };

        let rest: Vec<&str> = tokens.collect();
        let patronymic = if rest.is_empty() {
            None
        } else {
            Some(rest.join(" "))
        };

        Ok(Self {
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            patronymic,
        })
    }
}

impl FromStr for FullName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
