//! Main generator producing synthetic users.

use crate::birthday::{generate_birthday, latest_birthday};
use crate::pools::{
    feminize, filter_last_names, FEMALE_FIRST_NAMES, FEMALE_PATRONYMICS, LAST_NAME_ROOTS,
    MALE_FIRST_NAMES, MALE_PATRONYMICS,
};
use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use user_core::{User, SEX_FEMALE, SEX_MALE};

/// Error type for generator configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// Generated birthdays could fall after this date.
    #[error("Date {today} precedes the latest generated birthday {latest_birthday}")]
    TodayBeforeBirthdayRange {
        today: NaiveDate,
        latest_birthday: NaiveDate,
    },
}

/// Which subset of users to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Population {
    /// Either sex, any last name.
    Primary,
    /// Male users whose last name starts with [`crate::FILTER_LETTER`].
    Filtered,
}

/// Generator of synthetic users.
///
/// Each user is drawn independently from the name pools. The generator keeps
/// a single RNG for its whole lifetime, so iterators are not restartable:
/// calling [`UserGenerator::primary`] twice yields two different sequences.
///
/// `today` never precedes [`latest_birthday`], so every drawn user passes
/// validation.
pub struct UserGenerator {
    /// Random number generator, seeded for reproducibility
    rng: StdRng,
    /// Date used to validate and age every generated user
    today: NaiveDate,
    /// Number of users produced so far
    generated: u64,
    filter_last_names: Vec<&'static str>,
}

impl UserGenerator {
    /// Create a generator with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            // A clock set before the birthday range is clamped forward
            today: Local::now().date_naive().max(latest_birthday()),
            generated: 0,
            filter_last_names: filter_last_names(),
        }
    }

    /// Override the date used for validation and age computation.
    ///
    /// Rejects dates before [`latest_birthday`], which would let generated
    /// birthdays land in the future.
    pub fn with_today(mut self, today: NaiveDate) -> Result<Self, GeneratorError> {
        let latest_birthday = latest_birthday();
        if today < latest_birthday {
            return Err(GeneratorError::TodayBeforeBirthdayRange {
                today,
                latest_birthday,
            });
        }
        self.today = today;
        Ok(self)
    }

    /// Number of users generated so far.
    pub fn generated(&self) -> u64 {
        self.generated
    }

    /// Generate the next user of the given population.
    pub fn next_user(&mut self, population: Population) -> User {
        let user = match population {
            Population::Primary => self.primary_user(),
            Population::Filtered => self.filtered_user(),
        };
        self.generated += 1;
        user
    }

    fn primary_user(&mut self) -> User {
        let male = self.rng.gen_bool(0.5);
        let root = pick(&mut self.rng, LAST_NAME_ROOTS);

        let (sex, first_name, patronymic, last_name) = if male {
            (
                SEX_MALE,
                pick(&mut self.rng, MALE_FIRST_NAMES),
                pick(&mut self.rng, MALE_PATRONYMICS),
                root.to_string(),
            )
        } else {
            (
                SEX_FEMALE,
                pick(&mut self.rng, FEMALE_FIRST_NAMES),
                pick(&mut self.rng, FEMALE_PATRONYMICS),
                feminize(root),
            )
        };
        let birthday = generate_birthday(&mut self.rng);

        self.build(first_name, patronymic, last_name, birthday, sex)
    }

    fn filtered_user(&mut self) -> User {
        let first_name = pick(&mut self.rng, MALE_FIRST_NAMES);
        let patronymic = pick(&mut self.rng, MALE_PATRONYMICS);
        let last_name = pick(&mut self.rng, &self.filter_last_names);
        let birthday = generate_birthday(&mut self.rng);

        self.build(first_name, patronymic, last_name.to_string(), birthday, SEX_MALE)
    }

    fn build(
        &self,
        first_name: &str,
        patronymic: &str,
        last_name: String,
        birthday: NaiveDate,
        sex: &str,
    ) -> User {
        match User::create_on(
            first_name,
            Some(patronymic.to_string()),
            last_name,
            birthday,
            sex,
            self.today,
        ) {
            Ok(user) => user,
            // Pools hold non-empty names and `today` follows every birthday
            Err(e) => unreachable!("generated user failed validation: {e}"),
        }
    }

    /// Lazily generate `count` users of either sex.
    pub fn primary(&mut self, count: u64) -> UserIterator<'_> {
        self.population(count, 0)
    }

    /// Lazily generate `count` male users whose last name starts with the
    /// filter letter.
    pub fn filtered(&mut self, count: u64) -> UserIterator<'_> {
        self.population(0, count)
    }

    /// Lazily generate `primary` ordinary users followed by `filtered`
    /// filter-matching users, as one sequence.
    pub fn population(&mut self, primary: u64, filtered: u64) -> UserIterator<'_> {
        UserIterator {
            generator: self,
            primary_remaining: primary,
            filtered_remaining: filtered,
        }
    }
}

fn pick<R: Rng>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    // Pools are non-empty constants
    pool.choose(rng).copied().unwrap_or_default()
}

/// Iterator that lazily generates users.
pub struct UserIterator<'a> {
    generator: &'a mut UserGenerator,
    primary_remaining: u64,
    filtered_remaining: u64,
}

impl Iterator for UserIterator<'_> {
    type Item = User;

    fn next(&mut self) -> Option<Self::Item> {
        let population = if self.primary_remaining > 0 {
            self.primary_remaining -= 1;
            Population::Primary
        } else if self.filtered_remaining > 0 {
            self.filtered_remaining -= 1;
            Population::Filtered
        } else {
            return None;
        };

        Some(self.generator.next_user(population))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.primary_remaining + self.filtered_remaining) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for UserIterator<'_> {}
