//! Metrics from a bulk load.

use std::time::Duration;

/// Metrics from a generate-and-load operation.
#[derive(Debug, Clone, Default)]
pub struct LoadMetrics {
    /// Number of rows committed by the COPY.
    pub rows_loaded: u64,
    /// Total time taken, generation included.
    pub total_duration: Duration,
}

impl LoadMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_loaded as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}
