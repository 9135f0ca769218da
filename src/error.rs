//! Errors and bound validation for the sieve queries.
//!
//! Out-of-domain inputs are not errors: they answer with an empty sequence, a
//! zero count, or `None`. The only fault is running off the end of the chosen
//! width, which is reported instead of wrapping around into wrong primes.

use crate::word::SieveWord;

/// Errors from sieve queries and bound validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SieveError {
    /// The query needed a value past the width's maximum (e.g. the 100th prime
    /// in `u8`).
    Overflow { query: &'static str, width: &'static str },
    /// A caller-supplied bound is outside the safe range for the width.
    BoundTooLarge { bound: u64, max: u64, width: &'static str },
}

impl std::fmt::Display for SieveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SieveError::Overflow { query, width } => {
                write!(f, "{} overflowed the {} range", query, width)
            }
            SieveError::BoundTooLarge { bound, max, width } => write!(
                f,
                "bound {} exceeds the safe maximum {} for {}",
                bound, max, width
            ),
        }
    }
}

impl std::error::Error for SieveError {}

pub type SieveResult<T> = Result<T, SieveError>;

/// Largest cardinality that `n_primes`/`nth_prime` accept for width `T`:
/// `⌊T::MAX / ln T::MAX⌋`, the point past which the n-th prime can no longer be
/// represented.
pub fn max_cardinality<T: SieveWord>() -> u64 {
    let max = T::max_value().widen() as f64;
    (max / max.ln()) as u64
}

/// Validate a range bound (`simple_sieve`, `segmented_sieve`, `count_primes`).
pub fn checked_range_bound<T: SieveWord>(bound: u64) -> SieveResult<T> {
    T::narrow(bound).ok_or(SieveError::BoundTooLarge {
        bound,
        max: T::max_value().widen(),
        width: T::NAME,
    })
}

/// Validate a cardinality (`n_primes`, `nth_prime`) against `max_cardinality`.
pub fn checked_cardinality<T: SieveWord>(count: u64) -> SieveResult<usize> {
    let max = max_cardinality::<T>();
    if count > max {
        return Err(SieveError::BoundTooLarge {
            bound: count,
            max,
            width: T::NAME,
        });
    }
    usize::try_from(count).map_err(|_| SieveError::BoundTooLarge {
        bound: count,
        max: usize::MAX as u64,
        width: T::NAME,
    })
}
