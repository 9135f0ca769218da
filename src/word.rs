//! # Word — Unsigned Widths the Sieve Runs Over
//!
//! Every query is generic over the unsigned integer type that holds its primes.
//! The width fixes the largest representable value, which is where the gap
//! table stops and what every window's arithmetic must stay inside.
//!
//! The trait is sealed: only `u8`, `u16`, `u32` and `u64` implement it. Offsets
//! inside a window are always `usize`, so a `u64` sieve assumes a 64-bit target.

use core::fmt::{Debug, Display};
use core::hash::Hash;

use num_traits::{AsPrimitive, NumCast, PrimInt, Unsigned};

mod private {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Unsigned integer type a sieve can produce primes in.
pub trait SieveWord:
    private::Sealed + PrimInt + Unsigned + Hash + Debug + Display + AsPrimitive<usize> + 'static
{
    /// Short name used in logs and CLI output (`"u32"`).
    const NAME: &'static str;

    /// Widen to `u64` for estimates and bound checks.
    #[inline]
    fn widen(self) -> u64 {
        // every implementor is at most 64 bits wide
        self.to_u64().unwrap_or(u64::MAX)
    }

    /// Narrow a `u64` into this width, `None` when it does not fit.
    #[inline]
    fn narrow(value: u64) -> Option<Self> {
        <Self as NumCast>::from(value)
    }

    /// Offset `self` by a window position. `None` past `Self::max_value()`.
    #[inline]
    fn offset(self, by: usize) -> Option<Self> {
        Self::narrow(by as u64).and_then(|by| self.checked_add(&by))
    }
}

impl SieveWord for u8 {
    const NAME: &'static str = "u8";
}

impl SieveWord for u16 {
    const NAME: &'static str = "u16";
}

impl SieveWord for u32 {
    const NAME: &'static str = "u32";
}

impl SieveWord for u64 {
    const NAME: &'static str = "u64";
}

/// Integer square root: the largest `r` with `r * r <= n`.
///
/// Seeded from `f64` and corrected with checked arithmetic, so it is exact for
/// the whole `u64` range even where `f64` rounds.
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut r = (n as f64).sqrt() as u64;
    while r > 0 && r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
        r += 1;
    }
    r
}
