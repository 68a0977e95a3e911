//! PostgreSQL storage for user-bench.
//!
//! - [`UserRepository`] - connection handling and every SQL statement
//! - [`copy`] - the streaming bulk loader (one binary COPY per batch)
//! - [`UserService`] - caller-facing operations, including the timed
//!   filtered scan
//! - [`benchmark`] - filtered scan timed before and after creating the
//!   `(sex, lastname)` index
//!
//! ```text
//! UserGenerator ──► UserService::generate_and_load ──► copy_users (COPY ... BINARY)
//!
//! run_index_benchmark:
//!   find_filtered_scan (T1) ──► ensure_performance_index ──► find_filtered_scan (T2)
//! ```

pub mod args;
pub mod benchmark;
pub mod copy;
pub mod error;
pub mod index;
pub mod metrics;
pub mod query;
pub mod repository;
pub mod row;
pub mod schema;
pub mod service;

pub use args::PopulateArgs;
pub use benchmark::{BenchmarkReport, QueryTiming};
pub use error::StoreError;
pub use metrics::LoadMetrics;
pub use repository::UserRepository;
pub use service::UserService;
