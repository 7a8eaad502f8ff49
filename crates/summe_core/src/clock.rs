//! Elapsed-time measurement for the benchmark loop.
//!
//! Measurements use the process CPU clock, matching the C `clock()` style of
//! timing a single-threaded computation. When the platform cannot report
//! process CPU time the stopwatch falls back to the monotonic wall clock, and
//! the resulting [`ClockSource`] says so.

use std::fmt;
use std::time::{Duration, Instant};

use cpu_time::ProcessTime;
use tracing::warn;

/// Which clock produced a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSource {
    /// CPU time consumed by this process (user + system).
    ProcessCpu,
    /// Monotonic wall-clock time.
    Monotonic,
}

impl fmt::Display for ClockSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockSource::ProcessCpu => write!(f, "process-cpu"),
            ClockSource::Monotonic => write!(f, "monotonic"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Sample {
    Cpu(ProcessTime),
    Wall(Instant),
}

/// Start sample of a measurement; the end sample is taken from the same clock.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Sample,
}

impl Stopwatch {
    /// Starts a measurement on the process CPU clock, or on the monotonic clock
    /// if CPU time is unavailable.
    pub fn start() -> Self {
        match ProcessTime::try_now() {
            Ok(now) => Self { start: Sample::Cpu(now) },
            Err(e) => {
                warn!(error = %e, "process CPU clock unavailable, using monotonic clock");
                Self::start_monotonic()
            }
        }
    }

    /// Starts a measurement on the monotonic clock.
    pub fn start_monotonic() -> Self {
        Self { start: Sample::Wall(Instant::now()) }
    }

    pub fn source(&self) -> ClockSource {
        match self.start {
            Sample::Cpu(_) => ClockSource::ProcessCpu,
            Sample::Wall(_) => ClockSource::Monotonic,
        }
    }

    /// Time spent since [`Stopwatch::start`], read from the same clock.
    pub fn elapsed(&self) -> Duration {
        match self.start {
            Sample::Cpu(start) => match ProcessTime::try_now() {
                Ok(end) => end.duration_since(start),
                // The CPU clock answered once; if it stops answering there is no
                // consistent end sample, so report nothing rather than mix clocks.
                Err(e) => {
                    warn!(error = %e, "process CPU clock failed on end sample");
                    Duration::ZERO
                }
            },
            Sample::Wall(start) => start.elapsed(),
        }
    }
}
