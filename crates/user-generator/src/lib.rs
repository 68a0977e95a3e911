//! Synthetic user generator for user-bench load testing.
//!
//! [`UserGenerator`] draws plausible [`user_core::User`] records from fixed
//! name pools. A seeded RNG makes a run reproducible; every call keeps
//! drawing from the same RNG, so asking twice yields different users.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  UserGenerator  │
//! │                 │
//! │  - rng (StdRng) │
//! │  - today        │
//! │  - generated    │
//! └────────┬────────┘
//!          │  primary(n) / filtered(n) / population(p, f)
//!          ▼
//!    UserIterator (lazy, exact size)  ──►  user-store bulk loader
//! ```
//!
//! # Example
//!
//! ```rust
//! use user_generator::{UserGenerator, FILTER_LETTER};
//!
//! let mut generator = UserGenerator::new(42);
//! for user in generator.filtered(3) {
//!     assert_eq!(user.sex(), "Male");
//!     assert!(user.last_name().starts_with(FILTER_LETTER));
//! }
//! ```

pub mod birthday;
pub mod generator;
pub mod pools;

// Re-exports for convenience
pub use generator::{GeneratorError, Population, UserGenerator, UserIterator};
pub use pools::FILTER_LETTER;
