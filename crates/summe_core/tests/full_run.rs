//! Full-size benchmark run through the public API.

use summe_core::{expected_sum, ClockSource, SummationBenchmark, DEFAULT_LIMIT};

#[test]
fn one_billion_sums_exactly() {
    let report = SummationBenchmark::new().run().expect("fixed limit never overflows");

    assert_eq!(report.sum, 500_000_000_500_000_000);
    assert_eq!(Some(report.sum), expected_sum(DEFAULT_LIMIT));
    assert!(report.seconds() >= 0.0);
    assert!(matches!(report.clock, ClockSource::ProcessCpu | ClockSource::Monotonic));

    let rendered = report.to_string();
    let mut lines = rendered.lines();
    assert_eq!(lines.next(), Some("Summe: 500000000500000000"));
    let timing = lines.next().expect("second line");
    assert!(timing.starts_with("Zeit benötigt: "));
    assert!(timing.ends_with(" Sekunden"));
    assert_eq!(lines.next(), None);
}
