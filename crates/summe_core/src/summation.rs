//! The summation loop itself.

use std::hint::black_box;

/// Upper bound of the fixed benchmark run.
pub const DEFAULT_LIMIT: i64 = 1_000_000_000;

/// Adds every integer in `1..=limit` with a plain counting loop.
///
/// Returns `Some(0)` when `limit <= 0`, and `None` without looping when the
/// total does not fit in an `i64`. The counter goes through [`black_box`] so
/// the optimizer cannot replace the loop with the closed form; the whole point
/// of the benchmark is to time the iterations.
pub fn sum_to(limit: i64) -> Option<i64> {
    expected_sum(limit)?;

    let mut accumulator: i64 = 0;
    let mut counter: i64 = 1;
    while counter <= limit {
        accumulator += black_box(counter);
        counter += 1;
    }
    Some(accumulator)
}

/// Closed form `limit * (limit + 1) / 2`, or `None` if it does not fit in `i64`.
pub fn expected_sum(limit: i64) -> Option<i64> {
    if limit <= 0 {
        return Some(0);
    }
    // One of limit and limit + 1 is even; halve that one first so the product
    // only overflows when the result itself does.
    let next = limit.checked_add(1)?;
    if limit % 2 == 0 {
        (limit / 2).checked_mul(next)
    } else {
        limit.checked_mul(next / 2)
    }
}
