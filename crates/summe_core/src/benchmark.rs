//! Summation benchmark: time the loop, hand back a [`Report`].

use tracing::{debug, info_span};

use crate::clock::Stopwatch;
use crate::error::{BenchError, BenchResult};
use crate::report::Report;
use crate::summation::{sum_to, DEFAULT_LIMIT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummationBenchmark {
    limit: i64,
}

impl Default for SummationBenchmark {
    fn default() -> Self {
        Self::new()
    }
}

impl SummationBenchmark {
    /// Benchmark over `1..=1_000_000_000`.
    pub fn new() -> Self {
        Self { limit: DEFAULT_LIMIT }
    }

    pub fn with_limit(limit: i64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Sums `1..=limit` and measures the CPU time of the loop alone.
    ///
    /// Fails with [`BenchError::Overflow`] before looping if the total cannot
    /// be held in an `i64`.
    pub fn run(&self) -> BenchResult<Report> {
        let _span = info_span!("summation", limit = self.limit).entered();

        let stopwatch = Stopwatch::start();
        let sum = sum_to(self.limit).ok_or(BenchError::Overflow { limit: self.limit })?;
        let elapsed = stopwatch.elapsed();

        let report = Report::new(sum, elapsed, stopwatch.source());
        debug!(
            sum,
            elapsed_secs = report.seconds(),
            clock = %report.clock,
            "summation finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn default_limit_is_one_billion() {
        assert_eq!(SummationBenchmark::new().limit(), 1_000_000_000);
        assert_eq!(SummationBenchmark::default(), SummationBenchmark::new());
    }

    #[test]
    fn zero_limit_sums_to_zero() {
        let report = SummationBenchmark::with_limit(0).run().unwrap();
        assert_eq!(report.sum, 0);
        assert!(report.seconds() >= 0.0);
    }

    #[test]
    fn small_run_matches_closed_form() {
        let report = SummationBenchmark::with_limit(1_000_000).run().unwrap();
        assert_eq!(report.sum, 500_000_500_000);
    }

    #[test]
    fn overflowing_limit_is_rejected() {
        let err = SummationBenchmark::with_limit(i64::MAX).run().unwrap_err();
        assert!(matches!(err, BenchError::Overflow { limit } if limit == i64::MAX));
    }

    #[test]
    fn repeated_runs_agree() {
        let bench = SummationBenchmark::with_limit(250_000);
        assert_eq!(bench.run().unwrap().sum, bench.run().unwrap().sum);
    }

    #[test]
    #[traced_test]
    fn run_logs_result() {
        SummationBenchmark::with_limit(10).run().unwrap();
        assert!(logs_contain("summation finished"));
        assert!(logs_contain("sum=55"));
    }
}
