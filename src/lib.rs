//! # segsieve — Segmented Sieve of Eratosthenes
//!
//! Prime enumeration over unsigned ranges, in a whole-range form and in a
//! windowed form whose scratch memory is O(√n), plus four queries built on the
//! windowed engine:
//!
//! | Query | Input | Answer |
//! |-------|-------|--------|
//! | [`simple_sieve`] | bound `n` | primes ≤ n |
//! | [`segmented_sieve`] | bound `n` | primes ≤ n, one window at a time |
//! | [`count_primes`] | bound `n` | π(n) |
//! | [`n_primes`] | count `n` | the first n primes |
//! | [`nth_prime`] | index `n` | the n-th prime, `None` for 0 |
//! | [`gap_table`] | — | lazy stream of record gaps up to `T::MAX` |
//!
//! Every query is generic over the unsigned width `T` ([`SieveWord`]: `u8`,
//! `u16`, `u32`, `u64`). Out-of-domain inputs answer empty, zero or `None`;
//! running past `T::MAX` is reported as [`SieveError::Overflow`].
//!
//! ```
//! use segsieve::{count_primes, n_primes, nth_prime, simple_sieve};
//!
//! assert_eq!(simple_sieve(10u32), vec![2, 3, 5, 7]);
//! assert_eq!(count_primes(100u32), 25);
//! assert_eq!(nth_prime::<u32>(6), Ok(Some(13)));
//! assert_eq!(n_primes::<u32>(5), Ok(vec![2, 3, 5, 7, 11]));
//! ```

pub mod config;
pub mod error;
pub mod gaps;
pub mod nth;
pub mod report;
pub mod segmented;
pub mod sieve;
pub mod word;

pub use error::{SieveError, SieveResult};
pub use gaps::{gap_table, GapRecord, GapTable};
pub use nth::{n_primes, nth_prime};
pub use segmented::{count_primes, mark_window, segmented_sieve, Sweep};
pub use sieve::{simple_sieve, MarkBuffer};
pub use word::SieveWord;
