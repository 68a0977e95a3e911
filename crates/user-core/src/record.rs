//! The user record.

use crate::error::ValidationError;
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

/// Surrogate key assigned by storage on insert.
pub type UserId = i32;

/// Value stored in `sex` for male users.
pub const SEX_MALE: &str = "Male";

/// Value stored in `sex` for female users.
pub const SEX_FEMALE: &str = "Female";

/// First letter of the last names selected by the filtered scan.
pub const FILTER_LETTER: char = 'F';

/// A user profile.
///
/// Built through [`User::create`] (validated) or [`User::restore`] (rows read
/// back from storage). `age` is always derived from `birthday`; there is no
/// way to supply it independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: Option<UserId>,
    first_name: String,
    patronymic: Option<String>,
    last_name: String,
    birthday: NaiveDate,
    age: i32,
    sex: String,
}

impl User {
    /// Create a validated user, using the local clock for "today".
    pub fn create(
        first_name: impl Into<String>,
        patronymic: Option<String>,
        last_name: impl Into<String>,
        birthday: NaiveDate,
        sex: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::create_on(
            first_name,
            patronymic,
            last_name,
            birthday,
            sex,
            Local::now().date_naive(),
        )
    }

    /// Create a validated user as of `today`.
    ///
    /// Rejects empty/whitespace first or last names and birthdays after
    /// `today`. A birthday equal to `today` is accepted.
    pub fn create_on(
        first_name: impl Into<String>,
        patronymic: Option<String>,
        last_name: impl Into<String>,
        birthday: NaiveDate,
        sex: impl Into<String>,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        if first_name.trim().is_empty() {
            return Err(ValidationError::EmptyFirstName);
        }
        if last_name.trim().is_empty() {
            return Err(ValidationError::EmptyLastName);
        }
        if birthday > today {
            return Err(ValidationError::FutureBirthday { birthday, today });
        }

        Ok(Self {
            id: None,
            first_name,
            patronymic,
            last_name,
            birthday,
            age: age_on(birthday, today),
            sex: sex.into(),
        })
    }

    /// Rehydrate a row read from storage.
    ///
    /// Storage is authoritative, so nothing is validated; `age` is still
    /// recomputed from `birthday` against the local clock.
    pub fn restore(
        id: UserId,
        first_name: String,
        patronymic: Option<String>,
        last_name: String,
        birthday: NaiveDate,
        sex: String,
    ) -> Self {
        Self {
            id: Some(id),
            first_name,
            patronymic,
            last_name,
            birthday,
            age: age_on(birthday, Local::now().date_naive()),
            sex,
        }
    }

    /// Attach the key assigned by a single-row insert.
    pub fn with_id(mut self, id: UserId) -> Self {
        debug_assert!(self.id.is_none(), "user id is assigned once");
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn patronymic(&self) -> Option<&str> {
        self.patronymic.as_deref()
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birthday(&self) -> NaiveDate {
        self.birthday
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn sex(&self) -> &str {
        &self.sex
    }

    /// `"Last First Patronymic"`, without a trailing space when the
    /// patronymic is absent.
    pub fn full_name(&self) -> String {
        match &self.patronymic {
            Some(patronymic) => format!("{} {} {}", self.last_name, self.first_name, patronymic)
                .trim()
                .to_string(),
            None => format!("{} {}", self.last_name, self.first_name),
        }
    }
}

/// Calendar age on `today` of someone born on `birthday`.
///
/// One year is subtracted while this year's birthday is still ahead.
/// People born on Feb 29 turn a year older on Mar 1 in non-leap years.
pub fn age_on(birthday: NaiveDate, today: NaiveDate) -> i32 {
    let age = today.year() - birthday.year();
    if (birthday.month(), birthday.day()) > (today.month(), today.day()) {
        age - 1
    } else {
        age
    }
}
