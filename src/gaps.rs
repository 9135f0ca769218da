//! # Gaps — Record Prime Gaps Across a Whole Width
//!
//! Walks every prime up to `T::MAX` and reports each gap that beats all gaps
//! before it (the maximal prime gaps, OEIS A002386 / A005250). The gap between
//! consecutive primes `p1 < p2` counts the composites strictly between them:
//! `p2 - p1 - 1`. The running record starts at zero, so only strictly
//! positive gaps are reported and the stream opens with `(3, 5, 1)`.
//!
//! The scan is a lazy iterator. Nothing but the base primes (≤ √T::MAX) and a
//! single window of marks is held; the only state carried from one window to
//! the next is the last prime seen and the current record.
//!
//! Windows have the base width `⌊√T::MAX⌋ + 1` and start right above the base
//! bound. The final window is cut so that it ends on `T::MAX` itself: every
//! representable value is examined and no window boundary is ever computed
//! past the maximum.
//!
//! | Width | Windows | Records | Last record |
//! |-------|---------|---------|-------------|
//! | `u8`  | 15      | 5       | (113, 127, 13) |
//! | `u16` | 255     | 13      | (31397, 31469, 71) |
//! | `u32` | 65535   | —       | runs for minutes |

use serde::Serialize;
use tracing::debug;

use crate::segmented::Sweep;
use crate::sieve::simple_sieve;
use crate::word::{isqrt, SieveWord};

/// A pair of consecutive primes whose gap beat every earlier gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GapRecord<T> {
    pub p1: T,
    pub p2: T,
    /// Composites strictly between `p1` and `p2`.
    pub gap: T,
}

/// Lazy stream of record gaps over the whole range of `T`.
pub struct GapTable<T: SieveWord> {
    sweep: Sweep<T>,
    next_base: usize,
    cursor: usize,
    last_prime: Option<T>,
    record: T,
}

/// Start a record-gap scan over `[0, T::MAX]`.
pub fn gap_table<T: SieveWord>() -> GapTable<T> {
    let ssiz = isqrt(T::max_value().widen()) + 1;
    let bound = T::narrow(ssiz).unwrap_or_else(T::max_value);
    let base = simple_sieve(bound);
    debug!(
        width = T::NAME,
        window = ssiz,
        base_primes = base.len(),
        "gap scan starting"
    );
    GapTable {
        sweep: Sweep::new(base, bound, ssiz as usize, T::max_value()),
        next_base: 0,
        cursor: 0,
        last_prime: None,
        record: T::zero(),
    }
}

impl<T: SieveWord> GapTable<T> {
    /// Largest gap reported so far, zero before the first record.
    pub fn record(&self) -> T {
        self.record
    }

    /// Next prime in ascending order: the base primes, then each window's
    /// survivors.
    fn next_prime(&mut self) -> Option<T> {
        if let Some(&p) = self.sweep.base_primes().get(self.next_base) {
            self.next_base += 1;
            return Some(p);
        }
        loop {
            if let Some(offset) = self.sweep.window().next_set(self.cursor) {
                self.cursor = offset + 1;
                return self.sweep.lo().offset(offset);
            }
            if !self.sweep.advance() {
                return None;
            }
            self.cursor = 0;
        }
    }
}

impl<T: SieveWord> Iterator for GapTable<T> {
    type Item = GapRecord<T>;

    fn next(&mut self) -> Option<GapRecord<T>> {
        while let Some(p2) = self.next_prime() {
            let Some(p1) = self.last_prime.replace(p2) else {
                continue;
            };
            let gap = p2 - p1 - T::one();
            if gap > self.record {
                self.record = gap;
                return Some(GapRecord { p1, p2, gap });
            }
        }
        None
    }
}
