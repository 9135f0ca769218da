//! # CLI Execution Functions
//!
//! Extracted from `main.rs` to keep the entry point slim. Validates the bound
//! against the chosen width, runs each query with a stopwatch around it, and
//! writes the result in the requested format.

use anyhow::{Context, Result};
use segsieve::config::SieveConfig;
use segsieve::error::{checked_cardinality, checked_range_bound};
use segsieve::report::{self, Report};
use segsieve::{
    count_primes, gap_table, n_primes, nth_prime, segmented_sieve, simple_sieve, SieveWord,
};
use serde::Serialize;
use std::io::{self, Write};
use std::time::Instant;
use tracing::info;

use super::{Cli, Commands, Format};

/// Run the selected subcommand with primes held in `T`.
pub fn run<T: SieveWord + Serialize>(cli: &Cli) -> Result<()> {
    let config = SieveConfig::load_or_default(cli.config.as_deref())?;
    info!(width = T::NAME, "segsieve starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Simple { n } => {
            let report = run_simple::<T>(range_bound(*n)?);
            emit(&mut out, cli.format, &config, &report)
        }
        Commands::Segmented { n } => {
            let report = run_segmented::<T>(range_bound(*n)?);
            emit(&mut out, cli.format, &config, &report)
        }
        Commands::Count { n } => {
            let report = run_count::<T>(range_bound(*n)?);
            emit(&mut out, cli.format, &config, &report)
        }
        Commands::First { n } => {
            let report = run_first::<T>(cardinality::<T>(*n)?)?;
            emit(&mut out, cli.format, &config, &report)
        }
        Commands::Nth { n } => {
            let report = run_nth::<T>(cardinality::<T>(*n)?)?;
            emit(&mut out, cli.format, &config, &report)
        }
        Commands::All { n } => {
            let bound = range_bound::<T>(*n)?;
            let count = cardinality::<T>(*n)?;
            emit(&mut out, cli.format, &config, &run_simple(bound))?;
            emit(&mut out, cli.format, &config, &run_segmented(bound))?;
            emit(&mut out, cli.format, &config, &run_count(bound))?;
            emit(&mut out, cli.format, &config, &run_first::<T>(count)?)?;
            emit(&mut out, cli.format, &config, &run_nth::<T>(count)?)
        }
        Commands::Gaps { limit } => run_gaps::<T>(&mut out, cli.format, &config, *limit),
    }
}

fn range_bound<T: SieveWord>(n: u64) -> Result<T> {
    checked_range_bound::<T>(n).with_context(|| format!("invalid bound {} for {}", n, T::NAME))
}

fn cardinality<T: SieveWord>(n: u64) -> Result<usize> {
    checked_cardinality::<T>(n).with_context(|| format!("invalid count {} for {}", n, T::NAME))
}

fn finished(query: &'static str, start: Instant) -> f64 {
    let elapsed_secs = start.elapsed().as_secs_f64();
    info!(query, elapsed_secs, "query finished");
    elapsed_secs
}

fn run_simple<T: SieveWord>(n: T) -> Report<T> {
    let start = Instant::now();
    let primes = simple_sieve(n);
    Report::SimpleSieve {
        n,
        primes,
        elapsed_secs: finished("simple_sieve", start),
    }
}

fn run_segmented<T: SieveWord>(n: T) -> Report<T> {
    let start = Instant::now();
    let primes = segmented_sieve(n);
    Report::SegmentedSieve {
        n,
        primes,
        elapsed_secs: finished("segmented_sieve", start),
    }
}

fn run_count<T: SieveWord>(n: T) -> Report<T> {
    let start = Instant::now();
    let count = count_primes(n);
    Report::CountPrimes {
        n,
        count,
        elapsed_secs: finished("count_primes", start),
    }
}

fn run_first<T: SieveWord>(n: usize) -> Result<Report<T>> {
    let start = Instant::now();
    let primes = n_primes::<T>(n)?;
    Ok(Report::NPrimes {
        n,
        primes,
        elapsed_secs: finished("n_primes", start),
    })
}

fn run_nth<T: SieveWord>(n: usize) -> Result<Report<T>> {
    let start = Instant::now();
    let prime = nth_prime::<T>(n)?;
    Ok(Report::NthPrime {
        n,
        prime,
        elapsed_secs: finished("nth_prime", start),
    })
}

fn emit<T: SieveWord + Serialize>(
    out: &mut impl Write,
    format: Format,
    config: &SieveConfig,
    report: &Report<T>,
) -> Result<()> {
    match format {
        Format::Text => out.write_all(report.render_text(&config.output).as_bytes())?,
        Format::Json => {
            serde_json::to_writer(&mut *out, report)?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Stream gap records as they are found, flushing after each one so a long
/// scan shows progress.
fn run_gaps<T: SieveWord + Serialize>(
    out: &mut impl Write,
    format: Format,
    config: &SieveConfig,
    limit: Option<usize>,
) -> Result<()> {
    let start = Instant::now();
    if format == Format::Text {
        out.write_all(report::gap_header(T::NAME, &config.output).as_bytes())?;
    }
    let mut emitted = 0usize;
    for record in gap_table::<T>().take(limit.unwrap_or(usize::MAX)) {
        match format {
            Format::Text => out.write_all(report::gap_row(&record, &config.output).as_bytes())?,
            Format::Json => {
                serde_json::to_writer(&mut *out, &record)?;
                out.write_all(b"\n")?;
            }
        }
        out.flush()?;
        emitted += 1;
    }
    let elapsed_secs = finished("gap_table", start);
    info!(records = emitted, elapsed_secs, "gap scan finished");
    Ok(())
}
