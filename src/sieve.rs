//! # Sieve — Whole-Range Sieve of Eratosthenes and the Mark Buffer
//!
//! The leaf of the crate. Provides:
//!
//! 1. **`MarkBuffer`**, a packed bitmap (one bit per candidate) that every sieve
//!    marks into. A set bit means "still a prime candidate", a clear bit means a
//!    multiple of some prime was struck there. The buffer is reset in place, so
//!    a segmented sweep allocates it once and reuses it for every window.
//! 2. **`simple_sieve`**, the classic sieve over `[0, n]`. Used directly, and to
//!    produce the base primes (≤ √boundary) that seed every segmented query.
//!
//! ## Algorithm
//!
//! Mark `0` and `1` non-prime, everything else a candidate. For each surviving
//! `i ≤ ⌊√(n+1)⌋` strike `i², i²+i, …`. Every composite `k ≤ n` has a prime
//! factor `≤ √k`, so survivors are exactly the primes.
//! Complexity: O(n log log n) time, O(n/8) bytes.
//!
//! ## References
//!
//! - Eratosthenes of Cyrene, ~240 BCE.
//! - OEIS A000720: π(n), the prime counting function.

use crate::word::{isqrt, SieveWord};

/// Generate all primes `≤ n` with a whole-range sieve.
///
/// Returns an empty vector for `n < 2`.
///
/// # Panics
///
/// Panics if `n + 1` does not fit in `usize` (only `u64::MAX` on 64-bit
/// targets); the allocation could never succeed anyway.
pub fn simple_sieve<T: SieveWord>(n: T) -> Vec<T> {
    let limit: usize = n.as_();
    if limit < 2 {
        return Vec::new();
    }
    assert!(
        limit < usize::MAX,
        "simple_sieve({}) needs a buffer of n+1 entries, which overflows usize",
        n
    );

    let len = limit + 1;
    let mut marks = MarkBuffer::with_capacity(len);
    marks.reset(len);
    marks.clear(0);
    marks.clear(1);

    let root = isqrt(len as u64) as usize;
    for i in 2..=root {
        if !marks.get(i) {
            continue;
        }
        for j in (i * i..len).step_by(i) {
            marks.clear(j);
        }
    }

    let mut primes = Vec::with_capacity(estimate_prime_count(limit));
    primes.extend(marks.iter_set().filter_map(|i| T::narrow(i as u64)));
    primes
}

/// Capacity hint for the prime lists built by `simple_sieve` and
/// `segmented_sieve`: `1.3·n / ln n`, never below π(n).
pub(crate) fn estimate_prime_count(n: usize) -> usize {
    match n {
        0..=9 => 4,
        _ => {
            let n = n as f64;
            (1.3 * n / n.ln()) as usize
        }
    }
}

/// Packed bitmap of prime candidates.
///
/// 8× smaller than `Vec<bool>`, and survivors are counted with hardware
/// `POPCNT` (via `count_ones()`). Bit `i` lives in word `i / 64` at position
/// `i % 64`; bits past `len` in the last word are always clear.
///
/// `reset` refills the buffer without giving back its allocation, which is
/// what lets a segmented sweep keep exactly one buffer alive from its first
/// window to its last.
#[derive(Debug, Default, Clone)]
pub struct MarkBuffer {
    words: Vec<u64>,
    len: usize,
}

impl MarkBuffer {
    /// An empty buffer with room for `bits` marks before it has to grow.
    pub fn with_capacity(bits: usize) -> Self {
        MarkBuffer {
            words: Vec::with_capacity(bits.div_ceil(64)),
            len: 0,
        }
    }

    /// Resize to `len` marks, all set (every position is a candidate again).
    pub fn reset(&mut self, len: usize) {
        let num_words = len.div_ceil(64);
        self.words.clear();
        self.words.resize(num_words, u64::MAX);
        let extra = num_words * 64 - len;
        if extra > 0 {
            if let Some(last) = self.words.last_mut() {
                *last >>= extra;
            }
        }
        self.len = len;
    }

    /// Number of marks in the current fill.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Marks the buffer can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.capacity() * 64
    }

    /// `true` if position `index` is still a candidate.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(
            index < self.len,
            "MarkBuffer index out of bounds: {} >= {}",
            index,
            self.len
        );
        self.words[index / 64] & (1u64 << (index % 64)) != 0
    }

    /// Strike position `index` (no longer a candidate).
    #[inline]
    pub fn clear(&mut self, index: usize) {
        debug_assert!(index < self.len);
        self.words[index / 64] &= !(1u64 << (index % 64));
    }

    /// Number of surviving candidates.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// First surviving position at or after `from`, skipping whole cleared
    /// words at a time.
    pub fn next_set(&self, from: usize) -> Option<usize> {
        if from >= self.len {
            return None;
        }
        let mut wi = from / 64;
        let mut word = self.words[wi] & (u64::MAX << (from % 64));
        loop {
            if word != 0 {
                return Some(wi * 64 + word.trailing_zeros() as usize);
            }
            wi += 1;
            word = *self.words.get(wi)?;
        }
    }

    /// Positions of the surviving candidates, ascending.
    pub fn iter_set(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &word)| SetBits {
            word,
            base: wi * 64,
        })
    }
}

/// Iterator over set bits within a single u64 word.
struct SetBits {
    word: u64,
    base: usize,
}

impl Iterator for SetBits {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.word == 0 {
            return None;
        }
        let tz = self.word.trailing_zeros() as usize;
        self.word &= self.word - 1; // clear lowest set bit
        Some(self.base + tz)
    }
}
