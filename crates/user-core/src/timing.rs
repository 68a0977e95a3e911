//! Wall-clock measurement of async operations.

use std::future::Future;
use std::time::{Duration, Instant};

/// Run `operation` to completion and return its output with the elapsed time.
///
/// The clock starts right before the future is first polled and stops once
/// it resolves, so for a query the duration covers materializing the whole
/// result set. Each call measures afresh.
pub async fn measure<F>(operation: F) -> (F::Output, Duration)
where
    F: Future,
{
    let started = Instant::now();
    let output = operation.await;
    (output, started.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_measure_returns_output() {
        let (value, elapsed) = measure(async { 40 + 2 }).await;
        assert_eq!(value, 42);
        assert!(elapsed < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_measure_covers_whole_operation() {
        let (_, elapsed) = measure(tokio::time::sleep(Duration::from_millis(20))).await;
        assert!(elapsed >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_measure_passes_errors_through() {
        let (result, _) = measure(async { Err::<(), _>("boom") }).await;
        assert_eq!(result, Err("boom"));
    }
}
