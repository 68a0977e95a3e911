//! Before/after comparison of the filtered scan around index creation.

use crate::error::StoreError;
use crate::service::UserService;
use std::time::Duration;
use tracing::info;
use user_core::timing::measure;

/// Timing of one filtered scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTiming {
    /// Rows returned by the scan.
    pub rows: usize,
    /// Wall-clock time until the full result set was materialized.
    pub elapsed: Duration,
}

/// Result of [`run_index_benchmark`].
///
/// Purely observational: nothing checks that `after` beats `before`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkReport {
    /// Scan without the performance index.
    pub before: QueryTiming,
    /// Time spent creating the index.
    pub index_build: Duration,
    /// Same scan with the index in place.
    pub after: QueryTiming,
}

impl BenchmarkReport {
    /// `before / after`, or `None` when the second scan took no measurable time.
    pub fn speedup(&self) -> Option<f64> {
        let after = self.after.elapsed.as_secs_f64();
        if after > 0.0 {
            Some(self.before.elapsed.as_secs_f64() / after)
        } else {
            None
        }
    }
}

/// Run the filtered scan, create the index, then run the scan again.
///
/// Both scans run against the same data in the same session so the second
/// timing is comparable to the first.
pub async fn run_index_benchmark(service: &UserService) -> Result<BenchmarkReport, StoreError> {
    info!("Step 1: filtered scan without index");
    let (users, elapsed) = service.find_filtered_scan().await?;
    let before = QueryTiming {
        rows: users.len(),
        elapsed,
    };
    info!("{} rows in {:?}", before.rows, before.elapsed);

    info!("Step 2: creating performance index");
    let (created, index_build) = measure(service.ensure_performance_index()).await;
    created?;
    info!("Index ready in {:?}", index_build);

    info!("Step 3: filtered scan with index");
    let (users, elapsed) = service.find_filtered_scan().await?;
    let after = QueryTiming {
        rows: users.len(),
        elapsed,
    };
    info!("{} rows in {:?}", after.rows, after.elapsed);

    Ok(BenchmarkReport {
        before,
        index_build,
        after,
    })
}
