//! Error types for the summation benchmark

use std::io;

/// Result type for benchmark operations
pub type BenchResult<T> = std::result::Result<T, BenchError>;

#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The closed-form total for this limit does not fit in an `i64` accumulator.
    #[error("sum of 1..={limit} overflows a 64-bit accumulator")]
    Overflow { limit: i64 },

    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}
