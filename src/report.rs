//! Query results as printable text or JSON.
//!
//! The binary runs a query, wraps its answer and elapsed time in a `Report`,
//! and renders it either as the classic column layout or as one JSON object
//! per line.

use serde::Serialize;
use std::fmt::{Display, Write};

use crate::config::OutputConfig;
use crate::gaps::GapRecord;

/// One finished query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum Report<T> {
    SimpleSieve {
        n: T,
        primes: Vec<T>,
        elapsed_secs: f64,
    },
    SegmentedSieve {
        n: T,
        primes: Vec<T>,
        elapsed_secs: f64,
    },
    CountPrimes {
        n: T,
        count: usize,
        elapsed_secs: f64,
    },
    NPrimes {
        n: usize,
        primes: Vec<T>,
        elapsed_secs: f64,
    },
    NthPrime {
        n: usize,
        prime: Option<T>,
        elapsed_secs: f64,
    },
}

impl<T: Display> Report<T> {
    /// Render in the column layout: heading, result, elapsed time, blank line.
    pub fn render_text(&self, out: &OutputConfig) -> String {
        let mut text = String::new();
        let elapsed = match self {
            Report::SimpleSieve {
                primes,
                elapsed_secs,
                ..
            } => {
                text.push_str("simple sieve\n");
                text.push_str(&format_columns(primes, out));
                elapsed_secs
            }
            Report::SegmentedSieve {
                primes,
                elapsed_secs,
                ..
            } => {
                text.push_str("segmented sieve\n");
                text.push_str(&format_columns(primes, out));
                elapsed_secs
            }
            Report::CountPrimes {
                n,
                count,
                elapsed_secs,
            } => {
                let _ = writeln!(text, "prime counting function\npi({}) = {}", n, count);
                elapsed_secs
            }
            Report::NPrimes {
                n,
                primes,
                elapsed_secs,
            } => {
                let _ = writeln!(text, "first {} prime nos.", n);
                text.push_str(&format_columns(primes, out));
                elapsed_secs
            }
            Report::NthPrime {
                n,
                prime,
                elapsed_secs,
            } => {
                let _ = writeln!(text, "nth prime no.");
                match prime {
                    Some(p) => {
                        let _ = writeln!(text, "prime no. {} = {}", n, p);
                    }
                    None => {
                        let _ = writeln!(text, "prime no. {} = none", n);
                    }
                }
                elapsed_secs
            }
        };
        let _ = writeln!(text, "elapsed time = {:.6} seconds\n", elapsed);
        text
    }
}

/// Right-aligned columns, `out.columns` per row, every row newline-terminated.
/// Sequences longer than `out.print_limit` are summarized by length.
pub fn format_columns<T: Display>(values: &[T], out: &OutputConfig) -> String {
    if values.len() > out.print_limit {
        return format!("({} values, over print limit {})\n", values.len(), out.print_limit);
    }
    let columns = out.columns.max(1);
    let mut text = String::new();
    for row in values.chunks(columns) {
        for value in row {
            let _ = write!(text, "{:>width$}", value, width = out.column_width);
        }
        text.push('\n');
    }
    text
}

/// Column header for a gap-table stream.
pub fn gap_header(width_name: &str, out: &OutputConfig) -> String {
    format!(
        "prime gaps ({})\n{:>w$}{:>w$}{:>w$}\n",
        width_name,
        "p1",
        "p2",
        "gap",
        w = out.column_width
    )
}

/// One gap record as a table row.
pub fn gap_row<T: Display>(record: &GapRecord<T>, out: &OutputConfig) -> String {
    format!(
        "{:>w$}{:>w$}{:>w$}\n",
        record.p1,
        record.p2,
        record.gap,
        w = out.column_width
    )
}
