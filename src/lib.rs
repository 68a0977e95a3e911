//! user-bench library
//!
//! Command-line plumbing for the `user-bench` binary: argument definitions
//! and connection-string configuration. Storage and the record model live in
//! the `user-store` and `user-core` crates.
//!
//! # CLI Usage
//!
//! ```bash
//! # Recreate the users table
//! user-bench create-table --connection-string "host=localhost user=postgres dbname=users"
//!
//! # Add one user
//! user-bench create-user "Ivanov Petr Sergeevich" 2009-07-12 Male
//!
//! # Load 1,000,000 random users plus 100 filter-matching ones
//! user-bench populate
//!
//! # Time the filtered scan before and after creating the index
//! user-bench optimize
//! ```

pub mod cli;
pub mod config;

pub use cli::{Cli, Commands, ConnectionOpts};
