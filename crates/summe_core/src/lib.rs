//! summe core library
//!
//! Sums the integers from 1 to one billion with a plain loop and measures the
//! processor time the loop took. The `summe` binary prints the result as
//!
//! ```text
//! Summe: 500000000500000000
//! Zeit benötigt: 0.4321 Sekunden
//! ```

pub mod benchmark;
pub mod clock;
pub mod error;
pub mod logging;
pub mod report;
pub mod summation;

pub use benchmark::SummationBenchmark;
pub use clock::{ClockSource, Stopwatch};
pub use error::{BenchError, BenchResult};
pub use logging::LoggingConfig;
pub use report::Report;
pub use summation::{expected_sum, sum_to, DEFAULT_LIMIT};
