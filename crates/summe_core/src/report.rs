//! Console report of a benchmark run.

use std::fmt;
use std::io::Write;
use std::time::Duration;

use crate::clock::ClockSource;
use crate::error::BenchResult;

/// Outcome of one run: the accumulated sum and the time it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub sum: i64,
    pub elapsed: Duration,
    pub clock: ClockSource,
}

impl Report {
    pub fn new(sum: i64, elapsed: Duration, clock: ClockSource) -> Self {
        Self { sum, elapsed, clock }
    }

    /// Elapsed time in fractional seconds.
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Writes both report lines and flushes `out`.
    pub fn write_to<W: Write>(&self, mut out: W) -> BenchResult<()> {
        write!(out, "{self}")?;
        out.flush()?;
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summe: {}", self.sum)?;
        writeln!(f, "Zeit benötigt: {:.4} Sekunden", self.seconds())
    }
}
