//! Core types for user-bench.
//!
//! This crate holds everything that does not touch storage:
//!
//! - [`User`] - the validated user record
//! - [`FullName`] - `"Last First [Patronymic...]"` parsing
//! - [`ValidationError`] - rejection reasons raised before anything reaches storage
//! - [`timing::measure`] - wall-clock measurement around an async operation
//!
//! # Architecture
//!
//! ```text
//! user-core (this crate)
//!    │
//!    ├─── user-generator  (builds synthetic Users)
//!    │
//!    └─── user-store      (persists and queries Users in PostgreSQL)
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use user_core::{FullName, User};
//!
//! let name: FullName = "Ivanov Petr Sergeevich".parse().unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 7, 12).unwrap();
//! let user = User::create_on(
//!     name.first_name,
//!     name.patronymic,
//!     name.last_name,
//!     NaiveDate::from_ymd_opt(2009, 7, 12).unwrap(),
//!     "Male",
//!     today,
//! )
//! .unwrap();
//! assert_eq!(user.age(), 15);
//! ```

pub mod error;
pub mod name;
pub mod record;
pub mod timing;

// Re-exports for convenience
pub use error::ValidationError;
pub use name::FullName;
pub use record::{age_on, User, UserId, FILTER_LETTER, SEX_FEMALE, SEX_MALE};
