//! # Nth — First-N Primes and the N-th Prime
//!
//! Both queries sieve upward until they have seen `n` primes, so the range is
//! not known in advance. The window width doubles as the base-sieve bound and
//! is estimated from the prime number theorem:
//!
//! ```text
//! ssiz = ⌊√(n ln n + n ln ln n)⌋ + 1      (n ≥ 6)
//! ssiz = 12                               (n < 6)
//! ```
//!
//! Rosser's theorem gives `p_n < n (ln n + ln ln n)` for `n ≥ 6`, so every
//! value swept before the n-th prime lies below `ssiz²` and the base primes up
//! to `ssiz` are enough to sieve it. Below 6 the fixed bound of 12 already
//! holds the first five primes and no window is swept.
//!
//! If the chosen width runs out before the n-th prime is reached, the query
//! fails with `SieveError::Overflow` instead of wrapping.

use tracing::debug;

use crate::error::{SieveError, SieveResult};
use crate::segmented::Sweep;
use crate::sieve::simple_sieve;
use crate::word::SieveWord;

/// Base bound and window width for a query that needs `n` primes.
pub fn window_estimate(n: usize) -> u64 {
    if n < 6 {
        return 12;
    }
    let nf = n as f64;
    let ln = nf.ln();
    (nf * ln + nf * ln.ln()).sqrt().floor() as u64 + 1
}

/// Seed a sweep for `n` primes: base primes up to the estimate (clamped to
/// `T::MAX`), then windows of the estimate's width starting right above it.
fn cardinality_sweep<T: SieveWord>(n: usize, query: &'static str) -> Sweep<T> {
    let ssiz = window_estimate(n);
    let bound = T::narrow(ssiz).unwrap_or_else(T::max_value);
    let base = simple_sieve(bound);
    debug!(
        query,
        width = T::NAME,
        n,
        window = ssiz,
        base_primes = base.len(),
        "cardinality sweep starting"
    );
    match T::narrow(ssiz) {
        Some(start) => Sweep::new(base, start, ssiz as usize, T::max_value()),
        None => Sweep::exhausted(base),
    }
}

/// The first `n` primes, ascending. Empty for `n == 0`.
pub fn n_primes<T: SieveWord>(n: usize) -> SieveResult<Vec<T>> {
    if n == 0 {
        return Ok(Vec::new());
    }
    let mut sweep = cardinality_sweep::<T>(n, "n_primes");
    let mut primes = sweep.base_primes().to_vec();
    if primes.len() >= n {
        primes.truncate(n);
        return Ok(primes);
    }
    primes.reserve(n - primes.len());
    while sweep.advance() {
        let wanted = n - primes.len();
        primes.extend(sweep.primes().take(wanted));
        if primes.len() == n {
            return Ok(primes);
        }
    }
    Err(SieveError::Overflow {
        query: "n_primes",
        width: T::NAME,
    })
}

/// The `n`-th prime (1-indexed): `nth_prime(1) == Some(2)`.
///
/// `n == 0` names no prime and answers `None` without sieving.
pub fn nth_prime<T: SieveWord>(n: usize) -> SieveResult<Option<T>> {
    if n == 0 {
        return Ok(None);
    }
    let mut sweep = cardinality_sweep::<T>(n, "nth_prime");
    if let Some(&p) = sweep.base_primes().get(n - 1) {
        return Ok(Some(p));
    }
    let mut count = sweep.base_primes().len();
    while sweep.advance() {
        let found = sweep.count();
        if count + found >= n {
            return Ok(sweep.primes().nth(n - count - 1));
        }
        count += found;
    }
    Err(SieveError::Overflow {
        query: "nth_prime",
        width: T::NAME,
    })
}
