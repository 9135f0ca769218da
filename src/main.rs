//! # Main — CLI Entry Point
//!
//! Parses the command line, sets up logging, and hands the chosen query to
//! `cli`. Results go to stdout; logs go to stderr.
//!
//! ## Subcommands
//!
//! `simple`, `segmented`, `count`, `first` and `nth` each take one positive
//! bound `N`. `all N` runs those five in order. `gaps` streams the record
//! prime gaps of the whole width.
//!
//! ## Global Options
//!
//! - `--width` / `SIEVE_WIDTH`: unsigned width the queries run in (default u32).
//! - `--format`: `text` columns or one JSON object per line.
//! - `--config` / `SIEVE_CONFIG`: TOML file with `[output]` layout settings.
//! - `LOG_FORMAT=json`: JSON logs; `RUST_LOG` sets the level (default info).

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(
    name = "segsieve",
    about = "Sieve primes over unsigned ranges in bounded memory"
)]
struct Cli {
    /// Unsigned integer width the queries run in
    #[arg(long, value_enum, env = "SIEVE_WIDTH", default_value_t = Width::U32)]
    width: Width,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// TOML file with [output] layout settings
    #[arg(long, env = "SIEVE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Width {
    U8,
    U16,
    U32,
    U64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List primes up to N with the whole-range sieve
    Simple {
        /// Upper bound (inclusive)
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        n: u64,
    },
    /// List primes up to N with the segmented sieve
    Segmented {
        /// Upper bound (inclusive)
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        n: u64,
    },
    /// Count primes up to N
    Count {
        /// Upper bound (inclusive)
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        n: u64,
    },
    /// List the first N primes
    First {
        /// Number of primes
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        n: u64,
    },
    /// Find the N-th prime
    Nth {
        /// 1-based index of the prime
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        n: u64,
    },
    /// Run simple, segmented, count, first and nth for the same N
    All {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        n: u64,
    },
    /// Stream record prime gaps up to the width's maximum
    Gaps {
        /// Stop after this many records
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // LOG_FORMAT=json for machine-readable logs, human-readable otherwise
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    match cli.width {
        Width::U8 => cli::run::<u8>(&cli),
        Width::U16 => cli::run::<u16>(&cli),
        Width::U32 => cli::run::<u32>(&cli),
        Width::U64 => cli::run::<u64>(&cli),
    }
}
