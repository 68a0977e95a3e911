//! Random birthday generation.

use chrono::NaiveDate;
use rand::Rng;

/// Earliest generated birth year.
pub const MIN_BIRTH_YEAR: i32 = 1950;

/// Latest generated birth year (inclusive).
pub const MAX_BIRTH_YEAR: i32 = 2004;

/// Highest generated day of month; valid in every month.
pub const MAX_BIRTH_DAY: u32 = 28;

/// Draw a birthday with uniform year in
/// [`MIN_BIRTH_YEAR`]..=[`MAX_BIRTH_YEAR`], month in 1..=12 and day in
/// 1..=[`MAX_BIRTH_DAY`].
pub fn generate_birthday<R: Rng>(rng: &mut R) -> NaiveDate {
    let year = rng.gen_range(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR);
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=MAX_BIRTH_DAY);
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(latest_birthday)
}

/// Last date a generated birthday can fall on.
pub fn latest_birthday() -> NaiveDate {
    NaiveDate::from_ymd_opt(MAX_BIRTH_YEAR, 12, MAX_BIRTH_DAY).unwrap_or(NaiveDate::MAX)
}
