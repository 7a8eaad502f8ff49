use std::io;

use anyhow::Context;
use clap::Parser;
use summe_core::{logging, BenchError, BenchResult, LoggingConfig, SummationBenchmark};

/// Sums 1..=1_000_000_000 in a loop and reports the CPU time it took.
#[derive(Parser, Debug)]
#[command(name = "summe", author, version, about, long_about = None)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    logging::init(LoggingConfig::from_env()).context("failed to initialize logging")?;

    let report = SummationBenchmark::new()
        .run()
        .context("summation benchmark failed")?;

    tolerate_closed_stdout(report.write_to(io::stdout().lock()))
        .context("failed to write report to stdout")?;

    Ok(())
}

/// A reader that went away before the report arrived does not fail the run.
fn tolerate_closed_stdout(result: BenchResult<()>) -> BenchResult<()> {
    match result {
        Err(BenchError::Output(e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
