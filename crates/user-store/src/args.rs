//! CLI argument definitions for loading users.

use clap::Args;

/// Arguments for generating and bulk loading users.
#[derive(Args, Clone, Debug)]
pub struct PopulateArgs {
    /// Number of random users of either sex
    #[arg(long, default_value = "1000000")]
    pub primary_count: u64,

    /// Number of male users whose last name starts with the filter letter
    #[arg(long, default_value = "100")]
    pub filtered_count: u64,

    /// Random seed for deterministic generation (omit for fresh random data)
    #[arg(long)]
    pub seed: Option<u64>,
}
